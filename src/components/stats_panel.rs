use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct StatsPanelProps {
    pub location_count: usize,
    pub country_count: usize,
}

#[function_component]
pub fn StatsPanel(props: &StatsPanelProps) -> Html {
    html! {
        <div class="travel-stats">
            <div class="stat-item">
                <span id="location-count" class="stat-number">{ props.location_count }</span>
                <span class="stat-label">{"Places"}</span>
            </div>
            <div class="stat-item">
                <span id="country-count" class="stat-number">{ props.country_count }</span>
                <span class="stat-label">{"Countries"}</span>
            </div>
        </div>
    }
}

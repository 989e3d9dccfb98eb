// Pure description of the gallery pane; the modal component renders it as-is.

use super::modal::ModalState;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GalleryImage {
    pub src: String,
    /// Caption, or the location name when the image has none.
    pub alt: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GalleryView {
    /// `None` hides the image element.
    pub image: Option<GalleryImage>,
    pub caption: String,
    /// "`n` / `total`", empty without images.
    pub counter: String,
    /// Show the prev/next buttons and the counter.
    pub show_nav: bool,
    /// Exactly one "no image" placeholder when set.
    pub placeholder: bool,
}

pub fn gallery_view(state: &ModalState) -> GalleryView {
    let Some(location) = state.current_location() else {
        return GalleryView::default();
    };
    match location.images.get(state.image_index()) {
        Some(img) => GalleryView {
            image: Some(GalleryImage {
                src: img.url.clone(),
                alt: img.caption.clone().unwrap_or_else(|| location.name.clone()),
            }),
            caption: img.caption.clone().unwrap_or_default(),
            counter: format!("{} / {}", state.image_index() + 1, location.images.len()),
            show_nav: location.has_gallery_nav(),
            placeholder: false,
        },
        None => GalleryView {
            placeholder: true,
            ..GalleryView::default()
        },
    }
}

use crate::core::models::PreviewImage;

/// Toolkit-neutral description of the preview shown next to a result. A host
/// adapter turns this into real widgets.
#[derive(Debug, Clone)]
pub struct PreviewPane {
    pub title: String,
    pub image: Option<PreviewImageBox>,
    pub text: String,
    pub buttons: Vec<PreviewButton>,
}

#[derive(Debug, Clone)]
pub struct PreviewImageBox {
    pub image: PreviewImage,
    pub width: u32,
    pub height: u32,
    pub max_size: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewButton {
    pub label: String,
    pub command: PreviewCommand,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviewCommand {
    OpenUrl(String),
    CopyText(String),
}

impl PreviewPane {
    pub fn button(&self, label: &str) -> Option<&PreviewButton> {
        self.buttons.iter().find(|button| button.label == label)
    }
}

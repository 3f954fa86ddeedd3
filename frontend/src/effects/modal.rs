use std::rc::Rc;

use yew::functional::Reducible;

pub const MATERIAL_ATTR: &str = "data-material";
pub const TYPE_ATTR: &str = "data-type";
pub const DESCRIPTION_ATTR: &str = "data-description";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MaterialDetails {
    pub name: String,
    pub kind: String,
    pub description: String,
    pub image_src: String,
}

impl MaterialDetails {
    /// Builds the details from a card's data attributes. Missing attributes become empty.
    pub fn from_attributes<F>(attribute: F, image_src: Option<String>) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            name: attribute(MATERIAL_ATTR).unwrap_or_default(),
            kind: attribute(TYPE_ATTR).unwrap_or_default(),
            description: attribute(DESCRIPTION_ATTR).unwrap_or_default(),
            image_src: image_src.unwrap_or_default(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ModalState {
    pub details: MaterialDetails,
    pub active: bool,
}

pub enum ModalAction {
    Open(MaterialDetails),
    Close,
    Escape,
    /// A click that landed on the modal; `on_backdrop` is false for clicks on its content.
    Backdrop { on_backdrop: bool },
}

impl ModalState {
    /// Fills in the details first, then shows the modal. Last click wins.
    pub fn open(&mut self, details: MaterialDetails) {
        self.details = details;
        self.active = true;
    }

    pub fn close(&mut self) -> bool {
        let was_active = self.active;
        self.active = false;
        was_active
    }

    pub fn apply(&mut self, action: ModalAction) {
        match action {
            ModalAction::Open(details) => self.open(details),
            ModalAction::Close => {
                self.close();
            }
            ModalAction::Escape => {
                if self.active {
                    self.close();
                }
            }
            ModalAction::Backdrop { on_backdrop } => {
                if on_backdrop {
                    self.close();
                }
            }
        }
    }
}

impl Reducible for ModalState {
    type Action = ModalAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        next.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn silk() -> MaterialDetails {
        MaterialDetails {
            name: "Duchess Silk".into(),
            kind: "Silk".into(),
            description: "Heavy satin weave".into(),
            image_src: "/assets/silk.jpg".into(),
        }
    }

    #[test]
    fn details_come_from_data_attributes() {
        let details = MaterialDetails::from_attributes(
            |name| match name {
                "data-material" => Some("Duchess Silk".to_string()),
                "data-type" => Some("Silk".to_string()),
                "data-description" => Some("Heavy satin weave".to_string()),
                _ => None,
            },
            Some("/assets/silk.jpg".to_string()),
        );
        assert_eq!(details, silk());
    }

    #[test]
    fn missing_attributes_become_empty() {
        let details = MaterialDetails::from_attributes(|_| None, None);
        assert_eq!(details, MaterialDetails::default());
    }

    #[test]
    fn open_populates_all_fields_before_activation() {
        let mut state = ModalState::default();
        state.apply(ModalAction::Open(silk()));
        assert!(state.active);
        assert_eq!(state.details, silk());
    }

    #[test]
    fn last_clicked_material_wins() {
        let mut state = ModalState::default();
        state.apply(ModalAction::Open(silk()));
        let linen = MaterialDetails {
            name: "Irish Linen".into(),
            ..silk()
        };
        state.apply(ModalAction::Open(linen.clone()));
        assert_eq!(state.details, linen);
    }

    #[test]
    fn escape_only_closes_an_active_modal() {
        let mut state = ModalState::default();
        state.apply(ModalAction::Escape);
        assert!(!state.active);

        state.apply(ModalAction::Open(silk()));
        state.apply(ModalAction::Escape);
        assert!(!state.active);
    }

    #[test]
    fn clicks_inside_the_content_keep_it_open() {
        let mut state = ModalState::default();
        state.apply(ModalAction::Open(silk()));
        state.apply(ModalAction::Backdrop { on_backdrop: false });
        assert!(state.active);
        state.apply(ModalAction::Backdrop { on_backdrop: true });
        assert!(!state.active);
    }

    #[test]
    fn close_reports_whether_it_was_open() {
        let mut state = ModalState::default();
        assert!(!state.close());
        state.open(silk());
        assert!(state.close());
    }
}

pub use web_sys::MouseEvent;
pub use yew::function_component;
pub use yew::prelude::{AttrValue, Callback, Children, Classes, Html, Properties, html};

#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum DaisyColor {
    Neutral,
    #[default]
    Primary,
    Secondary,
    Success,
    Warning,
}

impl DaisyColor {
    const fn suffix(self) -> &'static str {
        match self {
            Self::Neutral => "neutral",
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Success => "success",
            Self::Warning => "warning",
        }
    }

    #[must_use]
    pub fn class(self, prefix: &str) -> String {
        format!("{prefix}-{}", self.suffix())
    }
}

#[must_use]
pub fn class_list(base: &[&'static str], extra: &Classes) -> Classes {
    let mut classes = Classes::new();
    for item in base {
        classes.push(*item);
    }
    classes.push(extra.clone());
    classes
}

#[cfg(test)]
mod tests {
    use super::{DaisyColor, class_list};
    use yew::Classes;

    #[test]
    fn daisy_color_classes_include_prefix_and_suffix() {
        assert_eq!(DaisyColor::Success.class("badge"), "badge-success");
        assert_eq!(DaisyColor::default().class("btn"), "btn-primary");
        assert_eq!(DaisyColor::Warning.class("border"), "border-warning");
    }

    #[test]
    fn class_list_combines_base_and_extra() {
        let extra = Classes::from("mx-1");
        let rendered = class_list(&["btn", "btn-block"], &extra).to_string();
        assert!(rendered.contains("btn"));
        assert!(rendered.contains("btn-block"));
        assert!(rendered.contains("mx-1"));
    }
}

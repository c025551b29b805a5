//! Button Styles
//!
//! Class composition for buttons: base classes first, then the variant and
//! size, then caller extras so they win on conflict.

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum ButtonVariant {
    #[default]
    Default,
    Ghost,
    Primary,
    Danger,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum ButtonSize {
    #[default]
    Default,
    Small,
    Icon,
}

pub fn button_class(variant: ButtonVariant, size: ButtonSize, extra: &str) -> String {
    let variant = match variant {
        ButtonVariant::Default => "btn-default",
        ButtonVariant::Ghost => "btn-ghost",
        ButtonVariant::Primary => "btn-primary",
        ButtonVariant::Danger => "btn-danger",
    };
    let size = match size {
        ButtonSize::Default => "btn-md",
        ButtonSize::Small => "btn-sm",
        ButtonSize::Icon => "btn-icon",
    };
    let extra = extra.trim();
    if extra.is_empty() {
        format!("btn {} {}", variant, size)
    } else {
        format!("btn {} {} {}", variant, size, extra)
    }
}

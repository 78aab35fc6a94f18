use serde::{Deserialize, Serialize};

/// The kind of a row, determining the widget an adapter renders and how the
/// row's binding behaves.
///
/// Deserializes from an internally tagged object, so a form layout can be
/// described in JSON:
///
/// ```rust
/// use rowbind_binding::{ItemKind, SelectorStyle};
///
/// let kind: ItemKind = serde_json::from_str(r#"{"kind": "selector", "style": "menu"}"#).unwrap();
/// assert_eq!(kind.selector_style(), Some(SelectorStyle::Menu));
/// assert!(kind.auto_reload());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ItemKind {
    Label,
    /// A label whose text the host adjusts after every commit.
    TweakLabel,
    TextField(TextFieldOptions),
    TextView(TextViewOptions),
    Switch,
    Check,
    Stepper(StepperOptions),
    Slider(SliderOptions),
    Segment,
    Selector(SelectorOptions),
    MultiSelector(SelectorOptions),
    Date(DateOptions),
    Image,
    Button,
    Action,
}

/// Capabilities that an item kind may support.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemCapability {
    HasValue,
    Editable,
    Validatable,
    Selectable,
    Displayable,
    Interactive,
}

impl ItemKind {
    /// Returns the set of capabilities for this kind.
    #[must_use]
    pub fn capabilities(&self) -> &'static [ItemCapability] {
        use ItemCapability::*;

        const TEXT: &[ItemCapability] = &[HasValue, Editable, Validatable, Displayable];
        const CONTROL: &[ItemCapability] = &[HasValue, Editable, Displayable, Interactive];
        const SELECTION: &[ItemCapability] = &[
            HasValue,
            Editable,
            Validatable,
            Selectable,
            Displayable,
            Interactive,
        ];

        match self {
            Self::Label | Self::TweakLabel => &[HasValue, Displayable],
            Self::TextField(_) | Self::TextView(_) => TEXT,
            Self::Switch | Self::Check | Self::Image => CONTROL,
            Self::Stepper(_) | Self::Slider(_) | Self::Date(_) => {
                &[HasValue, Editable, Validatable, Displayable, Interactive]
            }
            Self::Segment | Self::Selector(_) | Self::MultiSelector(_) => SELECTION,
            Self::Button | Self::Action => &[Displayable, Interactive],
        }
    }

    #[must_use]
    pub fn has_capability(&self, cap: ItemCapability) -> bool {
        self.capabilities().contains(&cap)
    }

    #[must_use]
    pub fn has_value(&self) -> bool {
        self.has_capability(ItemCapability::HasValue)
    }

    #[must_use]
    pub fn is_editable(&self) -> bool {
        self.has_capability(ItemCapability::Editable)
    }

    #[must_use]
    pub fn is_validatable(&self) -> bool {
        self.has_capability(ItemCapability::Validatable)
    }

    #[must_use]
    pub fn is_selectable(&self) -> bool {
        self.has_capability(ItemCapability::Selectable)
    }

    #[must_use]
    pub fn is_interactive(&self) -> bool {
        self.has_capability(ItemCapability::Interactive)
    }

    /// Whether a committed write should ask the host to reload the row.
    ///
    /// Kinds whose widget does not reflect the new value by itself reload.
    #[must_use]
    pub const fn auto_reload(&self) -> bool {
        matches!(
            self,
            Self::Check | Self::Date(_) | Self::Image | Self::Selector(_) | Self::MultiSelector(_)
        )
    }

    /// How the option list of a selector is presented, if this is one.
    #[must_use]
    pub const fn selector_style(&self) -> Option<SelectorStyle> {
        match self {
            Self::Selector(options) | Self::MultiSelector(options) => Some(options.style),
            _ => None,
        }
    }

    /// String identifier for serialization and logging.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Label => "label",
            Self::TweakLabel => "tweak_label",
            Self::TextField(_) => "text_field",
            Self::TextView(_) => "text_view",
            Self::Switch => "switch",
            Self::Check => "check",
            Self::Stepper(_) => "stepper",
            Self::Slider(_) => "slider",
            Self::Segment => "segment",
            Self::Selector(_) => "selector",
            Self::MultiSelector(_) => "multi_selector",
            Self::Date(_) => "date",
            Self::Image => "image",
            Self::Button => "button",
            Self::Action => "action",
        }
    }
}

impl std::fmt::Display for ItemKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// OPTIONS
// ============================================================================

/// Options for single-line text entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextFieldOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    pub keyboard: KeyboardKind,
    pub alignment: TextAlignment,
}

/// Options for multi-line text entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextViewOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    /// Visible lines. `0` grows without limit.
    pub lines: u32,
}

impl Default for TextViewOptions {
    fn default() -> Self {
        Self {
            placeholder: None,
            lines: 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StepperOptions {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl Default for StepperOptions {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 1.0,
            step: 0.1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SliderOptions {
    pub min: f32,
    pub max: f32,
}

impl Default for SliderOptions {
    fn default() -> Self {
        Self { min: 0.0, max: 1.0 }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectorOptions {
    pub style: SelectorStyle,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DateOptions {
    pub mode: DateMode,
}

/// How a selector presents its options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectorStyle {
    /// A separate list pushed on top of the form.
    #[default]
    Push,
    Popover,
    ActionSheet,
    /// An inline menu anchored to the row.
    Menu,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateMode {
    #[default]
    Date,
    Time,
    DateAndTime,
}

/// Keyboard an adapter should offer for text entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyboardKind {
    #[default]
    Default,
    Ascii,
    Numbers,
    Decimal,
    Phone,
    Email,
    Url,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAlignment {
    Left,
    Center,
    #[default]
    Right,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn auto_reload_per_kind() {
        assert!(ItemKind::Check.auto_reload());
        assert!(ItemKind::Image.auto_reload());
        assert!(ItemKind::Date(DateOptions::default()).auto_reload());
        assert!(ItemKind::MultiSelector(SelectorOptions::default()).auto_reload());
        assert!(
            ItemKind::Selector(SelectorOptions {
                style: SelectorStyle::Menu
            })
            .auto_reload()
        );

        assert!(!ItemKind::Switch.auto_reload());
        assert!(!ItemKind::Segment.auto_reload());
        assert!(!ItemKind::Slider(SliderOptions::default()).auto_reload());
        assert!(!ItemKind::Stepper(StepperOptions::default()).auto_reload());
        assert!(!ItemKind::TextField(TextFieldOptions::default()).auto_reload());
    }

    #[test]
    fn capabilities() {
        let selector = ItemKind::MultiSelector(SelectorOptions::default());
        assert!(selector.is_selectable());
        assert!(selector.is_validatable());
        assert!(!ItemKind::Switch.is_selectable());
        assert!(!ItemKind::Button.has_value());
        assert!(ItemKind::Button.is_interactive());
        assert!(!ItemKind::Label.is_editable());
    }

    #[test]
    fn defaults_follow_widgets() {
        assert_eq!(TextFieldOptions::default().alignment, TextAlignment::Right);
        assert_eq!(TextViewOptions::default().lines, 3);
        let stepper = StepperOptions::default();
        assert!((stepper.step - 0.1).abs() < f64::EPSILON);
        assert_eq!(SelectorStyle::default(), SelectorStyle::Push);
    }

    #[test]
    fn serde_tagged() {
        let kind = ItemKind::TextField(TextFieldOptions {
            placeholder: Some("Name".into()),
            keyboard: KeyboardKind::Email,
            alignment: TextAlignment::Left,
        });
        let value = serde_json::to_value(&kind).unwrap();
        assert_eq!(
            value,
            json!({
                "kind": "text_field",
                "placeholder": "Name",
                "keyboard": "email",
                "alignment": "left"
            })
        );
        let back: ItemKind = serde_json::from_value(value).unwrap();
        assert_eq!(back, kind);
    }

    #[test]
    fn options_default_when_missing() {
        let kind: ItemKind =
            serde_json::from_value(json!({"kind": "stepper", "max": 10.0})).unwrap();
        assert_eq!(
            kind,
            ItemKind::Stepper(StepperOptions {
                min: 0.0,
                max: 10.0,
                step: 0.1
            })
        );
        let kind: ItemKind = serde_json::from_value(json!({"kind": "date"})).unwrap();
        assert_eq!(kind, ItemKind::Date(DateOptions { mode: DateMode::Date }));
        assert_eq!(kind.to_string(), "date");
    }
}

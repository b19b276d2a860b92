use chatadmin_core::{AppError, AppResult, NonEmptyString};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Input kinds supported by pre-chat and post-chat forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FormFieldType {
    /// Single-line text input.
    Text,
    /// Email input.
    Email,
    /// Phone number input.
    Tel,
    /// Multi-line text input.
    Textarea,
    /// Single-choice dropdown.
    Select,
    /// Single-choice radio group.
    Radio,
    /// Boolean checkbox.
    Checkbox,
    /// Numeric rating scale.
    Rating,
}

impl FormFieldType {
    /// Returns the stable wire value.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Email => "email",
            Self::Tel => "tel",
            Self::Textarea => "textarea",
            Self::Select => "select",
            Self::Radio => "radio",
            Self::Checkbox => "checkbox",
            Self::Rating => "rating",
        }
    }

    fn takes_options(self) -> bool {
        matches!(self, Self::Select | Self::Radio)
    }
}

/// One field of a pre-chat or post-chat form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormField {
    id: NonEmptyString,
    label: NonEmptyString,
    #[serde(rename = "type")]
    field_type: FormFieldType,
    #[serde(default)]
    placeholder: String,
    required: bool,
    #[serde(default)]
    options: Vec<String>,
    order: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    min: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    max: Option<i32>,
}

impl FormField {
    /// Creates a validated form field.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        field_type: FormFieldType,
        placeholder: impl Into<String>,
        required: bool,
        options: Vec<String>,
        order: i32,
        min: Option<i32>,
        max: Option<i32>,
    ) -> AppResult<Self> {
        if field_type.takes_options() {
            if options.is_empty() {
                return Err(AppError::Validation(format!(
                    "{} fields require at least one option",
                    field_type.as_str()
                )));
            }
        } else if !options.is_empty() {
            return Err(AppError::Validation(format!(
                "{} fields must not carry options",
                field_type.as_str()
            )));
        }

        if field_type != FormFieldType::Rating && (min.is_some() || max.is_some()) {
            return Err(AppError::Validation(
                "min and max are only valid for rating fields".to_owned(),
            ));
        }

        if let (Some(min), Some(max)) = (min, max)
            && min > max
        {
            return Err(AppError::Validation(format!(
                "rating min '{min}' must not exceed max '{max}'"
            )));
        }

        Ok(Self {
            id: NonEmptyString::new(id)?,
            label: NonEmptyString::new(label)?,
            field_type,
            placeholder: placeholder.into(),
            required,
            options,
            order,
            min,
            max,
        })
    }

    /// Returns the field identifier.
    #[must_use]
    pub fn id(&self) -> &NonEmptyString {
        &self.id
    }

    /// Returns the field label.
    #[must_use]
    pub fn label(&self) -> &NonEmptyString {
        &self.label
    }

    /// Returns the field input kind.
    #[must_use]
    pub fn field_type(&self) -> FormFieldType {
        self.field_type
    }

    /// Returns the sort key.
    #[must_use]
    pub fn order(&self) -> i32 {
        self.order
    }

    /// Returns the choice options for select/radio fields.
    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Returns whether the field must be filled before submit.
    #[must_use]
    pub fn required(&self) -> bool {
        self.required
    }
}

/// Rating widgets supported by the feedback prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FeedbackKind {
    /// Thumbs up/down.
    Thumbs,
    /// Five-star rating.
    Stars,
    /// Emoji scale.
    Emoji,
    /// Free-form custom question.
    Custom,
}

/// Visibility gate tied to another captured value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConditionalRule {
    /// Identifier of the field whose captured value is compared.
    pub field: String,
    /// Value that makes the gated question visible.
    pub value: Value,
}

/// One question of the feedback prompt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackQuestion {
    id: NonEmptyString,
    label: NonEmptyString,
    #[serde(rename = "type")]
    kind: FeedbackKind,
    order: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    conditional: Option<ConditionalRule>,
}

impl FeedbackQuestion {
    /// Creates a validated feedback question.
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        kind: FeedbackKind,
        order: i32,
        conditional: Option<ConditionalRule>,
    ) -> AppResult<Self> {
        if let Some(rule) = &conditional
            && rule.field.trim().is_empty()
        {
            return Err(AppError::Validation(
                "conditional rules must name a field".to_owned(),
            ));
        }

        Ok(Self {
            id: NonEmptyString::new(id)?,
            label: NonEmptyString::new(label)?,
            kind,
            order,
            conditional,
        })
    }

    /// Returns the question identifier.
    #[must_use]
    pub fn id(&self) -> &NonEmptyString {
        &self.id
    }

    /// Returns the question label.
    #[must_use]
    pub fn label(&self) -> &NonEmptyString {
        &self.label
    }

    /// Returns the rating widget kind.
    #[must_use]
    pub fn kind(&self) -> FeedbackKind {
        self.kind
    }

    /// Returns the sort key.
    #[must_use]
    pub fn order(&self) -> i32 {
        self.order
    }

    /// Returns the optional visibility gate.
    #[must_use]
    pub fn conditional(&self) -> Option<&ConditionalRule> {
        self.conditional.as_ref()
    }
}

/// Monotonic allocator for form field and feedback question identifiers.
///
/// Issues `field-1`, `field-2`, ... so that identifier assignment is
/// deterministic regardless of when a field is created.
#[derive(Debug, Default)]
pub struct FieldIdAllocator {
    next: u64,
}

impl FieldIdAllocator {
    /// Creates an allocator starting at one.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the next form field identifier.
    pub fn next_field_id(&mut self) -> String {
        self.next += 1;
        format!("field-{}", self.next)
    }

    /// Returns the next feedback question identifier.
    pub fn next_question_id(&mut self) -> String {
        self.next += 1;
        format!("question-{}", self.next)
    }
}

/// Sorts fields by their `order` key, breaking ties by identifier so the
/// result is stable across serialization round trips.
pub fn sort_fields(fields: &mut [FormField]) {
    fields.sort_by(|left, right| {
        left.order()
            .cmp(&right.order())
            .then_with(|| left.id().as_str().cmp(right.id().as_str()))
    });
}

#[cfg(test)]
mod tests {
    use super::{
        ConditionalRule, FeedbackKind, FeedbackQuestion, FieldIdAllocator, FormField,
        FormFieldType, sort_fields,
    };

    fn text_field(id: &str, order: i32) -> FormField {
        FormField::new(
            id,
            "Name",
            FormFieldType::Text,
            "",
            false,
            Vec::new(),
            order,
            None,
            None,
        )
        .unwrap_or_else(|_| unreachable!())
    }

    #[test]
    fn select_fields_require_options() {
        let field = FormField::new(
            "field-1",
            "Topic",
            FormFieldType::Select,
            "",
            true,
            Vec::new(),
            0,
            None,
            None,
        );
        assert!(field.is_err());
    }

    #[test]
    fn text_fields_reject_options() {
        let field = FormField::new(
            "field-1",
            "Name",
            FormFieldType::Text,
            "",
            false,
            vec!["a".to_owned()],
            0,
            None,
            None,
        );
        assert!(field.is_err());
    }

    #[test]
    fn rating_bounds_must_be_ordered() {
        let field = FormField::new(
            "field-1",
            "Score",
            FormFieldType::Rating,
            "",
            false,
            Vec::new(),
            0,
            Some(5),
            Some(1),
        );
        assert!(field.is_err());

        let valid = FormField::new(
            "field-1",
            "Score",
            FormFieldType::Rating,
            "",
            false,
            Vec::new(),
            0,
            Some(1),
            Some(5),
        );
        assert!(valid.is_ok());
    }

    #[test]
    fn min_max_only_valid_for_rating() {
        let field = FormField::new(
            "field-1",
            "Name",
            FormFieldType::Text,
            "",
            false,
            Vec::new(),
            0,
            Some(1),
            None,
        );
        assert!(field.is_err());
    }

    #[test]
    fn conditional_rules_must_name_a_field() {
        let question = FeedbackQuestion::new(
            "question-1",
            "Why that score?",
            FeedbackKind::Custom,
            1,
            Some(ConditionalRule {
                field: "  ".to_owned(),
                value: serde_json::json!("thumbs-down"),
            }),
        );
        assert!(question.is_err());
    }

    #[test]
    fn allocator_is_monotonic_across_kinds() {
        let mut allocator = FieldIdAllocator::new();
        assert_eq!(allocator.next_field_id(), "field-1");
        assert_eq!(allocator.next_question_id(), "question-2");
        assert_eq!(allocator.next_field_id(), "field-3");
    }

    #[test]
    fn sorting_breaks_order_ties_by_id() {
        let mut fields = vec![text_field("field-2", 1), text_field("field-1", 1)];
        sort_fields(&mut fields);
        assert_eq!(fields[0].id().as_str(), "field-1");
    }

    #[test]
    fn form_field_serializes_with_wire_names() {
        let field = text_field("field-1", 0);
        let value = serde_json::to_value(&field).unwrap_or(serde_json::Value::Null);
        assert_eq!(value["type"], "text");
        assert_eq!(value["id"], "field-1");
        assert!(value.get("min").is_none());
    }
}

use chatadmin_application::{CreateWidgetInput, WidgetService};
use chatadmin_core::AppResult;
use chatadmin_domain::{
    FeedbackKind, FeedbackQuestion, FieldIdAllocator, FormField, FormFieldType, WidgetConfig,
    builtin_templates,
};
use tracing::info;

/// Seeds one demo widget so a fresh instance has something to configure.
pub async fn seed_demo_widget(widget_service: &WidgetService) -> AppResult<()> {
    let mut allocator = FieldIdAllocator::new();

    let mut config = WidgetConfig::default();
    if let Some(template) = builtin_templates()
        .iter()
        .find(|template| template.id() == "corporate-blue")
    {
        config = template.apply_to(&config);
    }

    config.content.header_title = "Acme support".to_owned();
    config.content.enable_pre_chat_form = true;
    config.content.pre_chat_form_fields = vec![
        FormField::new(
            allocator.next_field_id(),
            "Name",
            FormFieldType::Text,
            "Jane Doe",
            true,
            Vec::new(),
            0,
            None,
            None,
        )?,
        FormField::new(
            allocator.next_field_id(),
            "Work email",
            FormFieldType::Email,
            "jane@company.com",
            true,
            Vec::new(),
            1,
            None,
            None,
        )?,
        FormField::new(
            allocator.next_field_id(),
            "Topic",
            FormFieldType::Select,
            "",
            false,
            vec![
                "Billing".to_owned(),
                "Technical".to_owned(),
                "Other".to_owned(),
            ],
            2,
            None,
            None,
        )?,
    ];
    config.content.enable_feedback = true;
    config.content.feedback_questions = vec![FeedbackQuestion::new(
        allocator.next_question_id(),
        "Was this conversation helpful?",
        FeedbackKind::Thumbs,
        0,
        None,
    )?];

    let record = widget_service
        .create_widget(CreateWidgetInput {
            name: "Demo support widget".to_owned(),
            config: Some(config),
        })
        .await?;

    info!(widget_id = %record.widget_id(), "seeded demo widget");
    Ok(())
}

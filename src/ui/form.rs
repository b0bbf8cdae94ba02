/// The report form: image intake area, description, location row,
/// category picker, severity slider, and the submit button. Pure
/// presentation over a draft snapshot; every interaction goes back
/// through `Message`.

use iced::widget::{
    button, column, container, horizontal_space, pick_list, row, slider, text, text_editor,
    text_input,
};
use iced::{Alignment, Element, Length};

use crate::state::draft::{Category, DraftReport, SEVERITY_MAX, SEVERITY_MIN};
use crate::Message;

/// Build the whole form from the current draft snapshot
pub fn view<'a>(
    draft: &'a DraftReport,
    description: &'a text_editor::Content,
    submitting: bool,
    loading_image: bool,
    locating: bool,
) -> Element<'a, Message> {
    let header = column![
        text("Report a Hazard").size(36),
        text("Help make your community safer by reporting hazards you encounter.").size(14),
    ]
    .spacing(6)
    .align_x(Alignment::Center);

    let submit_label = if submitting {
        "Submitting..."
    } else {
        "Submit Hazard Report"
    };
    let submit_button = button(
        text(submit_label).width(Length::Fill).center(),
    )
    .padding(12)
    .width(Length::Fill)
    .style(button::primary)
    .on_press_maybe((!submitting).then_some(Message::Submit));

    let mut form = column![
        labeled("Hazard Image *", image_section(draft, submitting, loading_image)),
        labeled(
            "Describe the Issue",
            text_editor(description)
                .placeholder("Please provide details about the hazard...")
                .on_action(Message::DescriptionEdited)
                .height(Length::Fixed(120.0))
                .into(),
        ),
        labeled("Location", location_section(draft, locating)),
        labeled(
            "Hazard Category *",
            pick_list(Category::ALL, draft.category, Message::CategorySelected)
                .placeholder("Select hazard type")
                .width(Length::Fill)
                .into(),
        ),
        labeled(
            "Severity Level",
            severity_section(draft),
        ),
    ]
    .spacing(20);

    if draft.is_high_severity() {
        form = form.push(advisory_banner());
    }

    form = form
        .push(submit_button)
        .push(
            text(
                "By submitting this report, you confirm that the information \
                 provided is accurate to the best of your knowledge.",
            )
            .size(12),
        );

    let card = container(form)
        .padding(24)
        .max_width(640)
        .style(container::rounded_box);

    container(column![header, card].spacing(24).align_x(Alignment::Center))
        .width(Length::Fill)
        .center_x(Length::Fill)
        .padding(32)
        .into()
}

/// A field label stacked over its input
fn labeled<'a>(label: &'a str, input: Element<'a, Message>) -> Element<'a, Message> {
    column![text(label).size(14), input].spacing(8).into()
}

/// Either the preview of the selected photo or the upload prompt
fn image_section<'a>(
    draft: &'a DraftReport,
    submitting: bool,
    loading_image: bool,
) -> Element<'a, Message> {
    match (&draft.image, &draft.preview) {
        (Some(image), Some(preview)) => {
            let handle = iced::widget::image::Handle::from_bytes(image.bytes.clone());
            column![
                iced::widget::image(handle)
                    .width(Length::Fill)
                    .height(Length::Fixed(260.0)),
                row![
                    text(format!(
                        "{} · {}x{}",
                        image.media_type.mime(),
                        preview.width,
                        preview.height
                    ))
                    .size(12),
                    horizontal_space(),
                    button(text("Remove").size(12))
                        .style(button::danger)
                        .on_press(Message::ClearImage),
                ]
                .align_y(Alignment::Center),
            ]
            .spacing(8)
            .into()
        }
        _ => {
            let prompt = if loading_image {
                "Reading image..."
            } else {
                "📷  Upload Image"
            };
            column![
                button(text(prompt))
                    .padding(14)
                    .style(button::secondary)
                    .on_press_maybe(
                        (!loading_image && !submitting).then_some(Message::PickImage)
                    ),
                text("PNG, JPG or JPEG (Max 10MB)").size(12),
                text("Your image will be analyzed to help categorize and assess the hazard.")
                    .size(12),
            ]
            .spacing(6)
            .into()
        }
    }
}

/// Manual address field plus the geolocation trigger
fn location_section<'a>(draft: &'a DraftReport, locating: bool) -> Element<'a, Message> {
    let detect_label = if locating {
        "Locating..."
    } else {
        "📍 Current Location"
    };
    row![
        text_input(
            "Enter the location or address of the hazard",
            &draft.location_text,
        )
        .on_input(Message::LocationChanged)
        .padding(10)
        .width(Length::Fill),
        button(text(detect_label))
            .padding(10)
            .style(button::secondary)
            .on_press_maybe((!locating).then_some(Message::DetectLocation)),
    ]
    .spacing(8)
    .align_y(Alignment::Center)
    .into()
}

fn severity_section(draft: &DraftReport) -> Element<'_, Message> {
    column![
        text(format!("Severity Level: {}/5", draft.severity)).size(14),
        row![
            text("Low").size(12),
            slider(
                SEVERITY_MIN..=SEVERITY_MAX,
                draft.severity,
                Message::SeverityChanged,
            )
            .step(1u8)
            .width(Length::Fill),
            text("High").size(12),
        ]
        .spacing(12)
        .align_y(Alignment::Center),
    ]
    .spacing(8)
    .into()
}

/// Shown once the slider crosses into the high-severity band
fn advisory_banner<'a>() -> Element<'a, Message> {
    container(
        text(
            "⚠️  You've indicated this is a high-severity hazard. \
             Please submit as soon as possible.",
        )
        .size(12),
    )
    .padding(10)
    .width(Length::Fill)
    .style(|_theme| container::Style {
        background: Some(iced::Color::from_rgb8(255, 248, 225).into()),
        text_color: Some(iced::Color::from_rgb8(133, 100, 4)),
        border: iced::border::rounded(6),
        ..container::Style::default()
    })
    .into()
}

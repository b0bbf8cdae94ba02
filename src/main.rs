use iced::widget::{text_editor, Stack};
use iced::{Element, Length, Task, Theme};
use rfd::FileDialog;

// Application modules
mod intake;
mod location;
mod notify;
mod state;
mod submit;
mod ui;

use intake::{IntakeConfig, IntakeError, SelectedImage};
use location::{LocationError, SystemLocation};
use notify::Notification;
use state::draft::{Category, Coordinates};
use state::store::FormStore;
use state::workflow::{
    SubmissionWorkflow, SubmitDecision, SubmitOutcome, SUCCESS_DISMISS_DELAY,
};
use submit::{ReportPayload, SimulatedBackend, SubmissionError};
use ui::toast::Toast;

/// Main application state
struct HazardReporter {
    /// The one live draft and its mutation surface
    store: FormStore,
    /// The submission state machine
    workflow: SubmissionWorkflow,
    /// Editor buffer for the description field (iced owns the cursor state)
    description: text_editor::Content,
    /// Pending notifications, newest last
    toasts: Vec<Toast>,
    next_toast_id: u64,
    backend: SimulatedBackend,
    location: SystemLocation,
    intake_config: IntakeConfig,
    /// Single-flight guards for the two intake-side async operations
    loading_image: bool,
    locating: bool,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// Keystrokes and cursor movement in the description editor
    DescriptionEdited(text_editor::Action),
    LocationChanged(String),
    CategorySelected(Category),
    SeverityChanged(u8),
    /// User clicked the upload area
    PickImage,
    /// Background image intake completed
    ImageLoaded(Result<SelectedImage, IntakeError>),
    ClearImage,
    /// User clicked the "Current Location" button
    DetectLocation,
    /// Background position query completed
    LocationAcquired(Result<Coordinates, LocationError>),
    /// User clicked submit
    Submit,
    /// The submission collaborator resolved
    SubmitFinished(Result<(), SubmissionError>),
    /// User closed the success overlay
    DismissSuccess,
    /// The auto-dismiss timer fired for the given token
    AutoDismissed(u64),
    DismissToast(u64),
}

impl HazardReporter {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        println!("🚧 Hazard Reporter initialized");

        (
            HazardReporter {
                store: FormStore::new(),
                workflow: SubmissionWorkflow::new(),
                description: text_editor::Content::new(),
                toasts: Vec::new(),
                next_toast_id: 0,
                backend: SimulatedBackend::new(),
                location: SystemLocation::from_env(),
                intake_config: IntakeConfig::default(),
                loading_image: false,
                locating: false,
            },
            Task::none(),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::DescriptionEdited(action) => {
                self.description.perform(action);
                let text = self.description.text();
                self.store
                    .set_description(text.trim_end_matches('\n').to_string());
                Task::none()
            }
            Message::LocationChanged(text) => {
                self.store.set_location_text(text);
                Task::none()
            }
            Message::CategorySelected(category) => {
                self.store.set_category(category);
                Task::none()
            }
            Message::SeverityChanged(level) => {
                self.store.set_severity(level);
                Task::none()
            }

            Message::PickImage => {
                if self.loading_image {
                    return Task::none();
                }

                // Show the native file picker dialog
                let file = FileDialog::new()
                    .set_title("Select a Photo of the Hazard")
                    .add_filter("Images", &["png", "jpg", "jpeg"])
                    .pick_file();

                if let Some(path) = file {
                    self.loading_image = true;
                    let config = self.intake_config.clone();
                    return Task::perform(
                        intake::select_image(path, config),
                        Message::ImageLoaded,
                    );
                }

                Task::none()
            }
            Message::ImageLoaded(result) => {
                self.loading_image = false;
                match result {
                    Ok(selected) => {
                        self.store.set_image(selected.image, selected.preview);
                    }
                    Err(error) => {
                        eprintln!("⚠️  Image intake failed: {error}");
                        self.push_toast(Notification::error(
                            "Image not accepted",
                            error.to_string(),
                        ));
                    }
                }
                Task::none()
            }
            Message::ClearImage => {
                self.store.clear_image();
                Task::none()
            }

            Message::DetectLocation => {
                if self.locating {
                    return Task::none();
                }
                self.locating = true;

                let provider = self.location.clone();
                Task::perform(
                    async move { provider.acquire().await },
                    Message::LocationAcquired,
                )
            }
            Message::LocationAcquired(result) => {
                self.locating = false;
                match result {
                    Ok(coordinates) => {
                        println!(
                            "📍 Position acquired: ({:.4}, {:.4})",
                            coordinates.latitude, coordinates.longitude
                        );
                        self.store.apply_geolocation(coordinates);
                        self.push_toast(Notification::info(
                            "Location detected",
                            "Your current location has been added to the report.",
                        ));
                    }
                    Err(error) => {
                        self.push_toast(error.notification());
                    }
                }
                Task::none()
            }

            Message::Submit => match self.workflow.begin_submit(self.store.snapshot()) {
                SubmitDecision::Accepted => {
                    let payload = ReportPayload::from_draft(self.store.snapshot());
                    let backend = self.backend.clone();
                    Task::perform(
                        async move { backend.submit(payload).await },
                        Message::SubmitFinished,
                    )
                }
                SubmitDecision::Rejected(issues) => {
                    for issue in issues {
                        self.push_toast(issue.notification());
                    }
                    Task::none()
                }
                SubmitDecision::Ignored => Task::none(),
            },
            Message::SubmitFinished(result) => match self.workflow.finish_submit(result) {
                SubmitOutcome::Submitted { dismiss_token } => {
                    // Fire-and-forget: the submitted draft is gone for good
                    self.store.reset();
                    self.description = text_editor::Content::new();
                    self.push_toast(Notification::info(
                        "Report submitted",
                        "Thank you! Your report has been received.",
                    ));

                    Task::perform(tokio::time::sleep(SUCCESS_DISMISS_DELAY), move |_| {
                        Message::AutoDismissed(dismiss_token)
                    })
                }
                SubmitOutcome::Failed => {
                    self.push_toast(Notification::error(
                        "Submission failed",
                        "There was an error submitting your report. Please try again.",
                    ));
                    // No failure screen: back to an interactive form, draft intact
                    self.workflow.recover();
                    Task::none()
                }
            },

            Message::DismissSuccess => {
                self.workflow.dismiss_success();
                Task::none()
            }
            Message::AutoDismissed(token) => {
                // Stale tokens (manually dismissed, or a newer success) are ignored
                self.workflow.auto_dismiss(token);
                Task::none()
            }
            Message::DismissToast(id) => {
                self.toasts.retain(|toast| toast.id != id);
                Task::none()
            }
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let page = ui::form::view(
            self.store.snapshot(),
            &self.description,
            self.workflow.is_submitting(),
            self.loading_image,
            self.locating,
        );

        let mut layers = Stack::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(
                iced::widget::scrollable(page)
                    .width(Length::Fill)
                    .height(Length::Fill),
            );

        if self.workflow.is_success() {
            layers = layers.push(ui::overlay::success());
        }

        if !self.toasts.is_empty() {
            layers = layers.push(ui::toast::strip(&self.toasts));
        }

        layers.into()
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Light
    }

    /// Queue a notification for the toast strip
    fn push_toast(&mut self, notification: Notification) {
        self.toasts.push(Toast {
            id: self.next_toast_id,
            notification,
        });
        self.next_toast_id += 1;
    }
}

fn main() -> iced::Result {
    iced::application(
        "Hazard Reporter",
        HazardReporter::update,
        HazardReporter::view,
    )
    .theme(HazardReporter::theme)
    .centered()
    .run_with(HazardReporter::new)
}

use iced::{
    Element,
    widget::{button, column, container, row, space, text, text_input},
};
use pawsome_lib::{NewPlaydate, entities::PlaydateField};

#[derive(Debug, Clone)]
pub enum Message {
    FieldInput(PlaydateField, String),
    CancelPressed,
    CreatePressed,
}

/// Action used for communicating with the parent component
#[derive(Debug)]
pub enum Action {
    None,
    Cancel,
    Create(NewPlaydate),
}

/// "Host a Playdate" form
#[derive(Debug, Default)]
pub struct PlaydateDialog {
    form: NewPlaydate,
}

impl PlaydateDialog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset the dialog state
    pub fn clear(&mut self) {
        self.form.clear();
    }

    pub fn update(&mut self, message: Message) -> Action {
        match message {
            Message::FieldInput(field, content) => {
                *self.form.field_mut(field) = content;
                Action::None
            }
            Message::CancelPressed => {
                self.clear();
                Action::Cancel
            }
            Message::CreatePressed => {
                if self.form.validate().is_err() {
                    return Action::None;
                }

                Action::Create(std::mem::take(&mut self.form))
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        // Only nag once the user has started filling the form in
        let problem = if self.form == NewPlaydate::default() {
            None
        } else {
            self.form.validate().err().map(|err| text(err.to_string()).size(12))
        };

        container(
            column![
                text("Host a Playdate").size(20),
                text_input("Location", &self.form.location)
                    .on_input(|s| Message::FieldInput(PlaydateField::Location, s)),
                text_input("Date (YYYY-MM-DD)", &self.form.date)
                    .on_input(|s| Message::FieldInput(PlaydateField::Date, s)),
                text_input("Description", &self.form.description)
                    .on_input(|s| Message::FieldInput(PlaydateField::Description, s))
                    .on_submit_maybe(self.validate().then_some(Message::CreatePressed)),
                problem,
                space::vertical(),
                row![
                    space::horizontal(),
                    button("Cancel")
                        .style(button::secondary)
                        .on_press(Message::CancelPressed),
                    button("Create Playdate")
                        .on_press_maybe(self.validate().then_some(Message::CreatePressed)),
                ]
                .spacing(8),
            ]
            .spacing(12),
        )
        .padding(20)
        .width(400)
        .height(360)
        .style(container::rounded_box)
        .into()
    }

    fn validate(&self) -> bool {
        self.form.validate().is_ok()
    }
}

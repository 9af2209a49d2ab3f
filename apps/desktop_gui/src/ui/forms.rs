//! Modal form state: field buffers, inline validation, and edit diffing.

use client_core::validation;
use shared::protocol::{
    CreateOrderRequest, CreateUserRequest, OrderSummary, UpdateOrderRequest, UpdateUserRequest,
    UserSummary,
};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserForm {
    pub name: String,
    pub email: String,
    pub name_error: Option<String>,
    pub email_error: Option<String>,
}

impl UserForm {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn prefilled(user: &UserSummary) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
            ..Self::default()
        }
    }

    /// Runs every field rule; inline messages stay set for rendering until the
    /// next attempt.
    pub fn validate(&mut self) -> bool {
        self.name_error = validation::validate_name(&self.name);
        self.email_error = validation::validate_email(&self.email);
        self.name_error.is_none() && self.email_error.is_none()
    }

    pub fn create_request(&self) -> CreateUserRequest {
        CreateUserRequest {
            name: self.name.clone(),
            email: self.email.clone(),
        }
    }

    pub fn update_request(&self, initial: &UserSummary) -> UpdateUserRequest {
        UpdateUserRequest::diff(initial, &self.name, &self.email)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderForm {
    pub description: String,
    pub price: f64,
    pub description_error: Option<String>,
}

impl OrderForm {
    pub fn empty() -> Self {
        Self {
            description: String::new(),
            price: validation::PRICE_MIN,
            description_error: None,
        }
    }

    pub fn prefilled(order: &OrderSummary) -> Self {
        Self {
            description: order.description.clone(),
            price: order.price,
            description_error: None,
        }
    }

    /// Price needs no message slot: the input control keeps it on the 0.5 grid,
    /// so only the description can fail.
    pub fn validate(&mut self) -> bool {
        self.description_error = validation::validate_description(&self.description);
        self.description_error.is_none()
    }

    pub fn snap_price(&mut self) {
        self.price = validation::snap_price(self.price);
    }

    pub fn create_request(&self) -> CreateOrderRequest {
        CreateOrderRequest {
            description: self.description.clone(),
            price: self.price,
        }
    }

    pub fn update_request(&self, initial: &OrderSummary) -> UpdateOrderRequest {
        UpdateOrderRequest::diff(initial, &self.description, self.price)
    }
}

pub fn labeled_text_field(
    ui: &mut egui::Ui,
    label: &str,
    value: &mut String,
    error: &Option<String>,
    enabled: bool,
) {
    ui.label(egui::RichText::new(label).strong());
    ui.add_enabled(
        enabled,
        egui::TextEdit::singleline(value).desired_width(f32::INFINITY),
    );
    if let Some(message) = error {
        ui.colored_label(ui.visuals().error_fg_color, message);
    }
    ui.add_space(4.0);
}

pub fn price_field(ui: &mut egui::Ui, form: &mut OrderForm, enabled: bool) {
    ui.label(egui::RichText::new("Price").strong());
    let response = ui.add_enabled(
        enabled,
        egui::DragValue::new(&mut form.price)
            .clamp_range(validation::PRICE_MIN..=f64::INFINITY)
            .speed(validation::PRICE_STEP)
            .suffix(" $"),
    );
    if response.changed() {
        form.snap_price();
    }
    ui.add_space(4.0);
}

/// Full-width submit control; disabled with a spinner while a request is in
/// flight so a double click cannot fire twice.
pub fn submit_button(ui: &mut egui::Ui, label: &str, in_flight: bool) -> bool {
    let clicked = ui
        .add_enabled(
            !in_flight,
            egui::Button::new(egui::RichText::new(label).strong())
                .min_size(egui::vec2(ui.available_width(), 30.0)),
        )
        .clicked();
    if in_flight {
        ui.horizontal(|ui| {
            ui.add(egui::Spinner::new());
            ui.weak("Submitting...");
        });
    }
    clicked && !in_flight
}

#[cfg(test)]
#[path = "tests/forms_tests.rs"]
mod tests;

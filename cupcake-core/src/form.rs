use tokio::sync::broadcast;
use tracing::debug;

use crate::order::{Order, MAX_QUANTITY, MIN_QUANTITY};
use crate::{flavor::FLAVORS, CoreError, CoreResult};

const CHANGE_CAPACITY: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderField {
    Flavor,
    Quantity,
    SpecialRequests,
    ExtraFrosting,
    AddSprinkles,
    Name,
    StreetAddress,
    City,
    Zipcode,
}

/// A single edit coming from one form control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderEdit {
    Flavor(i64),
    Quantity(i64),
    SpecialRequests(bool),
    ExtraFrosting(bool),
    AddSprinkles(bool),
    Name(String),
    StreetAddress(String),
    City(String),
    Zipcode(String),
}

impl OrderEdit {
    pub fn field(&self) -> OrderField {
        match self {
            OrderEdit::Flavor(_) => OrderField::Flavor,
            OrderEdit::Quantity(_) => OrderField::Quantity,
            OrderEdit::SpecialRequests(_) => OrderField::SpecialRequests,
            OrderEdit::ExtraFrosting(_) => OrderField::ExtraFrosting,
            OrderEdit::AddSprinkles(_) => OrderField::AddSprinkles,
            OrderEdit::Name(_) => OrderField::Name,
            OrderEdit::StreetAddress(_) => OrderField::StreetAddress,
            OrderEdit::City(_) => OrderField::City,
            OrderEdit::Zipcode(_) => OrderField::Zipcode,
        }
    }
}

/// Published after every applied edit.
#[derive(Debug, Clone)]
pub struct OrderChanged {
    pub field: OrderField,
    pub order: Order,
}

impl OrderChanged {
    pub fn is_valid(&self) -> bool {
        self.order.is_valid()
    }
}

/// Screen-scoped state for the order being edited.
///
/// Edits go through [`OrderForm::apply`], which publishes an [`OrderChanged`]
/// to every subscriber so the presentation can re-render and re-check validity.
pub struct OrderForm {
    order: Order,
    changes: broadcast::Sender<OrderChanged>,
}

impl OrderForm {
    pub fn new() -> Self {
        Self::with_order(Order::new())
    }

    pub fn with_order(order: Order) -> Self {
        let (changes, _) = broadcast::channel(CHANGE_CAPACITY);
        Self { order, changes }
    }

    pub fn order(&self) -> &Order {
        &self.order
    }

    /// Copy of the current order, handed to the submission service.
    pub fn snapshot(&self) -> Order {
        self.order.clone()
    }

    pub fn is_valid(&self) -> bool {
        self.order.is_valid()
    }

    pub fn subscribe(&self) -> broadcast::Receiver<OrderChanged> {
        self.changes.subscribe()
    }

    /// Apply an edit the way the matching control would.
    ///
    /// Quantity is clamped to the stepper range. A flavor outside the picker
    /// is rejected and the order is left as it was.
    pub fn apply(&mut self, edit: OrderEdit) -> CoreResult<()> {
        let field = edit.field();
        match edit {
            OrderEdit::Flavor(index) => {
                let in_range = usize::try_from(index).is_ok_and(|i| i < FLAVORS.len());
                if !in_range {
                    return Err(CoreError::Validation(format!(
                        "flavor index {} is not one of the {} flavors",
                        index,
                        FLAVORS.len()
                    )));
                }
                self.order.flavor = index;
            }
            OrderEdit::Quantity(quantity) => {
                self.order.quantity = quantity.clamp(MIN_QUANTITY, MAX_QUANTITY);
            }
            OrderEdit::SpecialRequests(on) => self.order.special_requests = on,
            OrderEdit::ExtraFrosting(on) => self.order.extra_frosting = on,
            OrderEdit::AddSprinkles(on) => self.order.add_sprinkles = on,
            OrderEdit::Name(value) => self.order.name = value,
            OrderEdit::StreetAddress(value) => self.order.street_address = value,
            OrderEdit::City(value) => self.order.city = value,
            OrderEdit::Zipcode(value) => self.order.zipcode = value,
        }
        self.publish(field);
        Ok(())
    }

    pub fn increment_quantity(&mut self) {
        if self.order.quantity < MAX_QUANTITY {
            self.order.quantity += 1;
            self.publish(OrderField::Quantity);
        }
    }

    pub fn decrement_quantity(&mut self) {
        if self.order.quantity > MIN_QUANTITY {
            self.order.quantity -= 1;
            self.publish(OrderField::Quantity);
        }
    }

    fn publish(&self, field: OrderField) {
        debug!("Order field {:?} changed, valid: {}", field, self.order.is_valid());
        // No subscribers is fine; nobody is rendering yet.
        let _ = self.changes.send(OrderChanged {
            field,
            order: self.order.clone(),
        });
    }
}

impl Default for OrderForm {
    fn default() -> Self {
        Self::new()
    }
}

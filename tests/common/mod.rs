use async_trait::async_trait;
use food_checkout::application::payment::PaymentProcessor;
use food_checkout::application::workflow::OrderWorkflow;
use food_checkout::domain::menu::Menu;
use food_checkout::domain::money::Money;
use food_checkout::domain::payment::PaymentPayload;
use food_checkout::domain::ports::PaymentGateway;
use food_checkout::error::Result;
use food_checkout::infrastructure::in_memory::InMemoryOrderHistory;
use rust_decimal_macros::dec;
use std::sync::{Arc, Mutex};

/// Gateway double that answers with a fixed reply and remembers every call.
#[derive(Clone)]
pub struct RecordingGateway {
    approve: bool,
    calls: Arc<Mutex<Vec<(Money, PaymentPayload)>>>,
}

impl RecordingGateway {
    pub fn new(approve: bool) -> Self {
        Self {
            approve,
            calls: Arc::default(),
        }
    }

    pub fn calls(&self) -> Vec<(Money, PaymentPayload)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl PaymentGateway for RecordingGateway {
    async fn authorize(&self, amount: Money, payload: &PaymentPayload) -> Result<bool> {
        self.calls.lock().unwrap().push((amount, payload.clone()));
        Ok(self.approve)
    }
}

pub fn workflow_with(gateway: &RecordingGateway) -> OrderWorkflow {
    OrderWorkflow::new(
        PaymentProcessor::new(Box::new(gateway.clone())),
        Box::new(InMemoryOrderHistory::new()),
    )
}

pub fn pizza_menu() -> Menu {
    let mut menu = Menu::new();
    menu.add_menu_item("Pizza", Money::new(dec!(10.0)));
    menu.add_menu_item("Burger", Money::new(dec!(8.5)));
    menu
}

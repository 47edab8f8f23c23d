use serde::{Deserialize, Serialize};

/// Identifier wrapper for catalog services.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ServiceId(pub String);

/// Catalog-supplied payload consumed when a service is added to the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceSnapshot {
    pub id: ServiceId,
    pub name: String,
    pub price: f64,
}

/// One cart entry: a unique service plus its quantity and free-text notes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLineItem {
    pub service_id: ServiceId,
    pub name: String,
    pub price: f64,
    pub quantity: u32,
    pub special_requests: String,
}

impl CartLineItem {
    pub fn line_total(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

/// Totals derived from the current line items.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CartTotals {
    pub items: u32,
    pub price: f64,
}

/// Session cart. Line items keep insertion order and a service id appears at
/// most once; repeated adds bump the existing line's quantity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<CartLineItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one unit of the service, merging into an existing line when the id
    /// is already present.
    pub fn add_item(&mut self, service: ServiceSnapshot) {
        if let Some(existing) = self
            .items
            .iter_mut()
            .find(|item| item.service_id == service.id)
        {
            existing.quantity += 1;
            return;
        }

        self.items.push(CartLineItem {
            service_id: service.id,
            name: service.name,
            price: service.price,
            quantity: 1,
            special_requests: String::new(),
        });
    }

    /// Removes the matching line item. Absent ids are ignored.
    pub fn remove_item(&mut self, service_id: &ServiceId) {
        self.items.retain(|item| &item.service_id != service_id);
    }

    /// Sets the quantity outright. Zero or below removes the line item rather
    /// than clamping to one.
    pub fn update_quantity(&mut self, service_id: &ServiceId, quantity: i64) {
        if quantity <= 0 {
            self.remove_item(service_id);
            return;
        }

        if let Some(item) = self
            .items
            .iter_mut()
            .find(|item| &item.service_id == service_id)
        {
            item.quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        }
    }

    /// Replaces the special-requests note for the matching line item. Absent
    /// ids are ignored.
    pub fn update_special_requests(&mut self, service_id: &ServiceId, text: impl Into<String>) {
        if let Some(item) = self
            .items
            .iter_mut()
            .find(|item| &item.service_id == service_id)
        {
            item.special_requests = text.into();
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Recomputed from the line items on every call; never cached.
    pub fn totals(&self) -> CartTotals {
        CartTotals {
            items: self.items.iter().map(|item| item.quantity).sum(),
            price: self.items.iter().map(CartLineItem::line_total).sum(),
        }
    }

    pub fn line_items(&self) -> &[CartLineItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

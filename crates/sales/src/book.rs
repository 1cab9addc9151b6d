//! In-memory order collection and the order management screen's state.

use orderdesk_core::{DomainError, DomainResult, Entity, OrderId};

use crate::order::{EditOutcome, Order, OrderEdit};

/// Ordered collection of orders, keyed by id.
///
/// Insertion order is list order. Ids are assigned sequentially by
/// [`OrderBook::create_draft`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderBook {
    orders: Vec<Order>,
    last_id: u64,
}

impl OrderBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new order with the next free id and append it.
    ///
    /// Fails with [`DomainError::IdsExhausted`] once an order holding
    /// `u64::MAX` is in the book.
    pub fn create_draft(&mut self) -> DomainResult<&mut Order> {
        let id = OrderId::new(self.last_id)
            .try_next()
            .ok_or(DomainError::IdsExhausted)?;
        self.last_id = id.get();
        let index = self.orders.len();
        self.orders.push(Order::new(id));
        Ok(&mut self.orders[index])
    }

    /// Append `order`, or replace the stored order with the same id.
    ///
    /// Returns the replaced order, if any.
    pub fn insert(&mut self, order: Order) -> Option<Order> {
        self.last_id = self.last_id.max(order.id().get());
        match self.position(*order.id()) {
            Some(index) => Some(core::mem::replace(&mut self.orders[index], order)),
            None => {
                self.orders.push(order);
                None
            }
        }
    }

    pub fn get(&self, id: OrderId) -> Option<&Order> {
        self.orders.iter().find(|order| *order.id() == id)
    }

    pub fn get_mut(&mut self, id: OrderId) -> Option<&mut Order> {
        self.orders.iter_mut().find(|order| *order.id() == id)
    }

    /// Remove the order with `id`. Absent ids are a no-op.
    pub fn remove(&mut self, id: OrderId) -> Option<Order> {
        let index = self.position(id)?;
        Some(self.orders.remove(index))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Order> {
        self.orders.iter()
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Orders whose shop or salesman contains `term`, ignoring case.
    ///
    /// An empty term matches every order.
    pub fn search(&self, term: &str) -> Vec<&Order> {
        let needle = term.to_lowercase();
        self.orders
            .iter()
            .filter(|order| {
                order.shop().to_lowercase().contains(&needle)
                    || order.salesman().to_lowercase().contains(&needle)
            })
            .collect()
    }

    fn position(&self, id: OrderId) -> Option<usize> {
        self.orders.iter().position(|order| *order.id() == id)
    }
}

impl FromIterator<Order> for OrderBook {
    fn from_iter<T: IntoIterator<Item = Order>>(iter: T) -> Self {
        let mut book = OrderBook::new();
        for order in iter {
            book.insert(order);
        }
        book
    }
}

/// Dialogs the order management screen can show for the selected order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialog {
    View,
    Edit,
    Delete,
}

/// Selection and dialog state of one order management screen.
///
/// Owned by the screen and passed by reference to every handler. The
/// selection is an id, not a copy: it is resolved against the book at use
/// time, and an id that no longer resolves means nothing is selected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ManagementState {
    selected: Option<OrderId>,
    dialog: Option<Dialog>,
}

impl ManagementState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select `id` and open `dialog` for it.
    pub fn open(&mut self, dialog: Dialog, id: OrderId) {
        self.selected = Some(id);
        self.dialog = Some(dialog);
    }

    /// Close whichever dialog is open. The selection is kept.
    pub fn close(&mut self) {
        self.dialog = None;
    }

    pub fn dialog(&self) -> Option<Dialog> {
        self.dialog
    }

    pub fn selected_id(&self) -> Option<OrderId> {
        self.selected
    }

    /// The selected order, if it is still in `book`.
    pub fn selected<'b>(&self, book: &'b OrderBook) -> Option<&'b Order> {
        self.selected.and_then(|id| book.get(id))
    }

    /// Store an edited copy of the selected order and close the dialog.
    ///
    /// Ignored when nothing resolvable is selected or when `edited` carries a
    /// different id.
    pub fn save_edit(&mut self, book: &mut OrderBook, edited: Order) -> EditOutcome {
        self.close();
        let Some(id) = self.selected else {
            tracing::debug!("save ignored: no order selected");
            return EditOutcome::Ignored;
        };
        if *edited.id() != id {
            tracing::debug!(selected = %id, edited = %edited.id(), "save ignored: id mismatch");
            return EditOutcome::Ignored;
        }
        match book.get_mut(id) {
            Some(slot) => {
                *slot = edited;
                EditOutcome::Applied
            }
            None => {
                tracing::debug!(order_id = %id, "save ignored: selected order no longer exists");
                EditOutcome::Ignored
            }
        }
    }

    /// Apply one edit command directly to the selected order.
    pub fn edit_selected(
        &self,
        book: &mut OrderBook,
        edit: &OrderEdit,
    ) -> DomainResult<EditOutcome> {
        match self.selected.and_then(|id| book.get_mut(id)) {
            Some(order) => order.apply_edit(edit),
            None => {
                tracing::debug!(selected = ?self.selected, "edit ignored: nothing selected");
                Ok(EditOutcome::Ignored)
            }
        }
    }

    /// Delete the selected order, clear the selection and close the dialog.
    pub fn confirm_delete(&mut self, book: &mut OrderBook) -> Option<Order> {
        self.close();
        let id = self.selected.take()?;
        let removed = book.remove(id);
        if removed.is_none() {
            tracing::debug!(order_id = %id, "delete ignored: selected order no longer exists");
        }
        removed
    }
}

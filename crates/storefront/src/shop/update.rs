//! The state mutator.
//!
//! [`update`] turns a [`Message`] into a [`Transition`]: the patch to apply
//! and the side effects the runtime should run afterwards. It never touches
//! the network or the filesystem.

use hollixton_core::{Account, Bag, Email, Item, ItemId, Modal, Tab};

use super::action::Action;
use super::state::{ShopState, StatePatch};

/// Everything that can change the state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// The shopper interacted with the page.
    User(Action),
    /// The catalog fetch completed.
    CatalogLoaded(Vec<Item>),
    /// The customer named by the session marker was fetched at startup.
    SessionRestored(Account),
    /// Credentials were checked against the record store.
    SignedIn(Account),
}

impl From<Action> for Message {
    fn from(action: Action) -> Self {
        Self::User(action)
    }
}

/// Work for the runtime once the patch is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Write the bag to the customer's record. Fire-and-forget.
    SyncBag { customer: Email, bag: Bag },
    /// Remember the signed-in customer across restarts.
    PersistMarker(Email),
    /// Forget the signed-in customer.
    ClearMarker,
}

/// Result of [`update`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transition {
    pub patch: StatePatch,
    pub effects: Vec<Effect>,
}

impl Transition {
    fn patch(patch: StatePatch) -> Self {
        Self {
            patch,
            effects: Vec::new(),
        }
    }

    fn with_effect(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }
}

/// Compute the next state change for `message`.
#[must_use]
pub fn update(state: &ShopState, message: Message) -> Transition {
    match message {
        Message::User(action) => on_action(state, action),
        Message::CatalogLoaded(catalog) => Transition::patch(StatePatch::new().catalog(catalog)),
        Message::SessionRestored(account) => sign_in(account, StatePatch::new()),
        Message::SignedIn(account) => sign_in(account, StatePatch::new().modal(None)),
    }
}

fn on_action(state: &ShopState, action: Action) -> Transition {
    match action {
        Action::Home => Transition::patch(StatePatch::new().tab(Tab::Home).selected(None)),
        Action::ShowTab(tab) => Transition::patch(StatePatch::new().tab(tab).selected(None)),
        Action::OpenModal(modal) => Transition::patch(StatePatch::new().modal(Some(modal))),
        Action::OpenProfile => {
            let modal = if state.is_signed_in() {
                Modal::Profile
            } else {
                Modal::SignIn
            };
            Transition::patch(StatePatch::new().modal(Some(modal)))
        }
        Action::CloseModal => Transition::patch(StatePatch::new().modal(None)),
        Action::SelectItem(id) => select(state, id),
        Action::AddToBag(id) => {
            let bag = state.bag().with_added(id);
            bag_changed(state, bag, StatePatch::new().selected(None))
        }
        Action::RemoveFromBag(id) => {
            let bag = state.bag().without(id);
            bag_changed(state, bag, StatePatch::new())
        }
        Action::Search(text) => Transition::patch(
            StatePatch::new()
                .search(text)
                .modal(None)
                .selected(None),
        ),
        Action::ClearSearch => Transition::patch(StatePatch::new().search(String::new())),
        Action::SignOut => Transition::patch(
            StatePatch::new()
                .customer(None)
                .bag(Bag::new())
                .modal(None),
        )
        .with_effect(Effect::ClearMarker),
    }
}

fn select(state: &ShopState, id: ItemId) -> Transition {
    match state.item(id) {
        Some(item) => Transition::patch(
            StatePatch::new()
                .selected(Some(item.clone()))
                .modal(None),
        ),
        None => {
            tracing::warn!(item_id = %id, "Selected item is not in the catalog");
            Transition::default()
        }
    }
}

fn bag_changed(state: &ShopState, bag: Bag, patch: StatePatch) -> Transition {
    let transition = Transition::patch(patch.bag(bag.clone()));
    match state.customer() {
        Some(customer) => transition.with_effect(Effect::SyncBag {
            customer: customer.id.clone(),
            bag,
        }),
        None => transition,
    }
}

fn sign_in(account: Account, patch: StatePatch) -> Transition {
    let Account { customer, bag } = account;
    let email = customer.id.clone();
    Transition::patch(patch.customer(Some(customer)).bag(bag))
        .with_effect(Effect::PersistMarker(email))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::shop::testing::{account, customer, sample_catalog, state_with_catalog};

    /// Run `messages` through `update` + `apply`, collecting the effects.
    fn run(state: &mut ShopState, messages: impl IntoIterator<Item = Message>) -> Vec<Effect> {
        let mut effects = Vec::new();
        for message in messages {
            let transition = update(state, message);
            state.apply(transition.patch);
            effects.extend(transition.effects);
        }
        effects
    }

    fn add(id: i64) -> Message {
        Action::AddToBag(ItemId::new(id)).into()
    }

    fn remove(id: i64) -> Message {
        Action::RemoveFromBag(ItemId::new(id)).into()
    }

    #[test]
    fn test_repeated_add_counts_up() {
        let mut state = ShopState::default();
        run(&mut state, (0..4).map(|_| add(7)));
        assert_eq!(state.bag().quantity_of(ItemId::new(7)), 4);
        assert_eq!(state.bag().len(), 1);
    }

    #[test]
    fn test_remove_then_add_restarts_at_one() {
        let mut state = ShopState::default();
        run(&mut state, [add(3), add(3), remove(3), add(3)]);
        assert_eq!(state.bag().quantity_of(ItemId::new(3)), 1);
    }

    #[test]
    fn test_add_add_remove_empties_bag() {
        let mut state = ShopState::default();
        run(&mut state, [add(5), add(5), remove(5)]);
        assert!(state.bag().is_empty());
    }

    #[test]
    fn test_add_keeps_insertion_order() {
        let mut state = ShopState::default();
        run(&mut state, [add(2), add(1), add(2)]);
        let order: Vec<i64> = state.bag().iter().map(|entry| entry.id.as_i64()).collect();
        assert_eq!(order, vec![2, 1]);
    }

    #[test]
    fn test_add_clears_selection() {
        let mut state = state_with_catalog(sample_catalog());
        run(&mut state, [Action::SelectItem(ItemId::new(1)).into()]);
        assert!(state.selected().is_some());

        run(&mut state, [add(1)]);
        assert!(state.selected().is_none());
    }

    #[test]
    fn test_signed_out_bag_changes_do_not_sync() {
        let mut state = ShopState::default();
        assert!(run(&mut state, [add(1), remove(1)]).is_empty());
    }

    #[test]
    fn test_signed_in_bag_changes_sync_new_bag() {
        let mut state = ShopState::default();
        run(&mut state, [Message::SignedIn(account(Bag::new()))]);

        let effects = run(&mut state, [add(1), add(2), remove(1)]);
        let synced: Vec<Bag> = effects
            .into_iter()
            .map(|effect| match effect {
                Effect::SyncBag { customer: email, bag } => {
                    assert_eq!(email, customer().id);
                    bag
                }
                other => panic!("unexpected effect {other:?}"),
            })
            .collect();

        assert_eq!(synced.len(), 3);
        assert_eq!(synced[2], *state.bag());
        assert_eq!(synced[0].quantity_of(ItemId::new(1)), 1);
    }

    #[test]
    fn test_sign_in_replaces_bag() {
        let mut state = ShopState::default();
        run(&mut state, [add(1), add(1)]);

        let stored = Bag::new().with_added(ItemId::new(2));
        let effects = run(&mut state, [Message::SignedIn(account(stored.clone()))]);

        assert_eq!(*state.bag(), stored);
        assert_eq!(state.customer(), Some(&customer()));
        assert_eq!(effects, vec![Effect::PersistMarker(customer().id)]);
    }

    #[test]
    fn test_sign_in_without_stored_bag_empties_bag() {
        let mut state = ShopState::default();
        run(&mut state, [add(1)]);
        run(&mut state, [Message::SignedIn(account(Bag::new()))]);
        assert!(state.bag().is_empty());
    }

    #[test]
    fn test_sign_in_closes_modal_but_restore_does_not() {
        let mut state = ShopState::default();
        run(&mut state, [Action::OpenModal(Modal::SignIn).into()]);
        run(&mut state, [Message::SessionRestored(account(Bag::new()))]);
        assert_eq!(state.modal(), Some(Modal::SignIn));

        run(&mut state, [Message::SignedIn(account(Bag::new()))]);
        assert_eq!(state.modal(), None);
    }

    #[test]
    fn test_sign_out_clears_customer_and_bag() {
        let mut state = ShopState::default();
        let stored = Bag::new().with_added(ItemId::new(2));
        run(
            &mut state,
            [
                Message::SignedIn(account(stored)),
                Action::OpenProfile.into(),
            ],
        );
        assert_eq!(state.modal(), Some(Modal::Profile));

        let effects = run(&mut state, [Action::SignOut.into()]);
        assert!(!state.is_signed_in());
        assert!(state.bag().is_empty());
        assert_eq!(state.modal(), None);
        assert_eq!(effects, vec![Effect::ClearMarker]);
    }

    #[test]
    fn test_profile_icon_depends_on_session() {
        let mut state = ShopState::default();
        run(&mut state, [Action::OpenProfile.into()]);
        assert_eq!(state.modal(), Some(Modal::SignIn));

        run(&mut state, [Message::SignedIn(account(Bag::new()))]);
        run(&mut state, [Action::OpenProfile.into()]);
        assert_eq!(state.modal(), Some(Modal::Profile));
    }

    #[test]
    fn test_select_closes_modal() {
        let mut state = state_with_catalog(sample_catalog());
        run(
            &mut state,
            [add(2), Action::OpenModal(Modal::Bag).into()],
        );
        run(&mut state, [Action::SelectItem(ItemId::new(2)).into()]);

        assert_eq!(state.selected().map(|item| item.id), Some(ItemId::new(2)));
        assert_eq!(state.modal(), None);
    }

    #[test]
    fn test_select_unknown_item_changes_nothing() {
        let state = state_with_catalog(sample_catalog());
        let transition = update(&state, Action::SelectItem(ItemId::new(99)).into());
        assert!(transition.patch.is_empty());
        assert!(transition.effects.is_empty());
    }

    #[test]
    fn test_navigation_clears_selection() {
        let mut state = state_with_catalog(sample_catalog());
        run(
            &mut state,
            [
                Action::ShowTab(Tab::Sale).into(),
                Action::SelectItem(ItemId::new(2)).into(),
                Action::Home.into(),
            ],
        );
        assert_eq!(state.tab(), Tab::Home);
        assert!(state.selected().is_none());

        run(
            &mut state,
            [
                Action::SelectItem(ItemId::new(1)).into(),
                Action::ShowTab(Tab::Girls).into(),
            ],
        );
        assert_eq!(state.tab(), Tab::Girls);
        assert!(state.selected().is_none());
    }

    #[test]
    fn test_search_closes_modal_and_keeps_tab() {
        let mut state = ShopState::default();
        run(
            &mut state,
            [
                Action::ShowTab(Tab::Guys).into(),
                Action::OpenModal(Modal::Search).into(),
                Action::Search("Shirt".to_string()).into(),
            ],
        );
        assert_eq!(state.search(), "Shirt");
        assert_eq!(state.tab(), Tab::Guys);
        assert_eq!(state.modal(), None);

        run(&mut state, [Action::ClearSearch.into()]);
        assert_eq!(state.search(), "");
    }

    #[test]
    fn test_catalog_load_leaves_session_fields_alone() {
        let mut state = ShopState::default();
        run(
            &mut state,
            [
                Message::SessionRestored(account(Bag::new().with_added(ItemId::new(1)))),
                Message::CatalogLoaded(sample_catalog()),
            ],
        );
        assert!(state.is_signed_in());
        assert_eq!(state.bag().len(), 1);
        assert_eq!(state.catalog().len(), 2);
    }
}

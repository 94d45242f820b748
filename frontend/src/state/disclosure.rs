use std::rc::Rc;

use yew::prelude::*;

use crate::content::MENU_ITEMS;

/// Open/closed state of the header's menus and the join popover.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DisclosureState {
    /// Desktop dropdown currently shown. At most one at a time.
    pub active_menu_item: Option<usize>,
    pub mobile_menu_open: bool,
    pub join_popover_open: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisclosureAction {
    OpenMenu(usize),
    CloseMenu(usize),
    ToggleMobileMenu,
    ToggleJoinPopover,
    /// A document-wide pointer-down while the popover listener is armed.
    PointerDown { inside_join_control: bool },
}

impl DisclosureState {
    pub fn open_menu(&mut self, index: usize) {
        debug_assert!(index < MENU_ITEMS.len(), "menu index {} out of range", index);
        self.active_menu_item = Some(index);
    }

    /// Only closes `index` if it is still the open one, so a late leave from
    /// the previous item can't hide the dropdown the pointer just entered.
    pub fn close_menu(&mut self, index: usize) {
        if self.active_menu_item == Some(index) {
            self.active_menu_item = None;
        }
    }

    pub fn is_menu_open(&self, index: usize) -> bool {
        self.active_menu_item == Some(index)
    }

    pub fn toggle_mobile_menu(&mut self) {
        self.mobile_menu_open = !self.mobile_menu_open;
    }

    pub fn toggle_join_popover(&mut self) {
        self.join_popover_open = !self.join_popover_open;
    }

    pub fn close_join_popover_if_outside(&mut self, inside_join_control: bool) {
        if !inside_join_control {
            self.join_popover_open = false;
        }
    }

    pub fn apply(&mut self, action: DisclosureAction) {
        match action {
            DisclosureAction::OpenMenu(index) => self.open_menu(index),
            DisclosureAction::CloseMenu(index) => self.close_menu(index),
            DisclosureAction::ToggleMobileMenu => self.toggle_mobile_menu(),
            DisclosureAction::ToggleJoinPopover => self.toggle_join_popover(),
            DisclosureAction::PointerDown { inside_join_control } => {
                self.close_join_popover_if_outside(inside_join_control)
            }
        }
    }
}

impl Reducible for DisclosureState {
    type Action = DisclosureAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = *self;
        next.apply(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduce_all(actions: &[DisclosureAction]) -> Rc<DisclosureState> {
        actions
            .iter()
            .fold(Rc::new(DisclosureState::default()), |state, action| state.reduce(*action))
    }

    #[test]
    fn opening_another_menu_replaces_the_active_one() {
        let state = reduce_all(&[DisclosureAction::OpenMenu(0), DisclosureAction::OpenMenu(2)]);
        assert_eq!(state.active_menu_item, Some(2));
        assert!(!state.is_menu_open(0));
    }

    #[test]
    fn at_most_one_menu_is_open_after_any_hover_sequence() {
        let mut state = DisclosureState::default();
        let steps = [
            DisclosureAction::OpenMenu(0),
            DisclosureAction::OpenMenu(1),
            DisclosureAction::CloseMenu(0),
            DisclosureAction::OpenMenu(3),
            DisclosureAction::CloseMenu(1),
            DisclosureAction::CloseMenu(3),
            DisclosureAction::OpenMenu(2),
        ];
        for step in steps {
            state.apply(step);
            let open = (0..MENU_ITEMS.len()).filter(|i| state.is_menu_open(*i)).count();
            assert!(open <= 1, "{:?} left {} menus open", step, open);
        }
        assert_eq!(state.active_menu_item, Some(2));
    }

    #[test]
    fn stale_close_is_ignored() {
        let state = reduce_all(&[
            DisclosureAction::OpenMenu(1),
            DisclosureAction::OpenMenu(3),
            DisclosureAction::CloseMenu(1),
        ]);
        assert_eq!(state.active_menu_item, Some(3));

        let state = state.reduce(DisclosureAction::CloseMenu(3));
        assert_eq!(state.active_menu_item, None);
    }

    #[test]
    fn mobile_menu_toggle_does_not_touch_desktop_dropdown() {
        let state = reduce_all(&[DisclosureAction::OpenMenu(0), DisclosureAction::ToggleMobileMenu]);
        assert!(state.mobile_menu_open);
        assert_eq!(state.active_menu_item, Some(0));

        let state = state.reduce(DisclosureAction::ToggleMobileMenu);
        assert!(!state.mobile_menu_open);
    }

    #[test]
    fn pointer_down_outside_closes_join_popover() {
        let state = reduce_all(&[DisclosureAction::ToggleJoinPopover]);
        assert!(state.join_popover_open);

        let state = state.reduce(DisclosureAction::PointerDown { inside_join_control: true });
        assert!(state.join_popover_open);

        let state = state.reduce(DisclosureAction::PointerDown { inside_join_control: false });
        assert!(!state.join_popover_open);
    }

    #[test]
    fn no_op_actions_keep_the_same_allocation() {
        let state = Rc::new(DisclosureState::default());
        let next = state.clone().reduce(DisclosureAction::CloseMenu(4));
        assert!(Rc::ptr_eq(&state, &next));
    }
}

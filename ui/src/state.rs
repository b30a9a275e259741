use yew::virtual_dom::AttrValue;
use yewdux::prelude::*;

use crate::components::pricing_wizard::BillingPeriod;

pub const PRICING_STEPS: [&str; 3] = ["Choose a plan", "Details", "Review"];

/// Showcase page state kept across route changes.
#[derive(Default, Clone, PartialEq, Store)]
pub struct ShowcaseState {
    // === Toggle page ===
    pub notifications_enabled: bool,

    // === Pricing page ===
    pub wizard_step: usize,
    pub selected_plan: Option<AttrValue>,
    pub billing: BillingPeriod,
}

impl ShowcaseState {
    pub fn is_last_step(&self) -> bool {
        self.wizard_step + 1 >= PRICING_STEPS.len()
    }

    pub fn next_step(&mut self) {
        if !self.is_last_step() {
            self.wizard_step += 1;
        }
    }

    pub fn previous_step(&mut self) {
        self.wizard_step = self.wizard_step.saturating_sub(1);
    }

    pub fn reset_wizard(&mut self) {
        self.wizard_step = 0;
        self.selected_plan = None;
        self.billing = BillingPeriod::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wizard_steps_stay_in_range() {
        let mut state = ShowcaseState::default();
        state.previous_step();
        assert_eq!(state.wizard_step, 0);

        for _ in 0..10 {
            state.next_step();
        }
        assert_eq!(state.wizard_step, PRICING_STEPS.len() - 1);
        assert!(state.is_last_step());
    }

    #[test]
    fn reset_clears_the_selection() {
        let mut state = ShowcaseState {
            wizard_step: 2,
            selected_plan: Some(AttrValue::from("pro")),
            billing: BillingPeriod::Yearly,
            ..Default::default()
        };
        state.reset_wizard();
        assert_eq!(state.wizard_step, 0);
        assert_eq!(state.selected_plan, None);
        assert_eq!(state.billing, BillingPeriod::Monthly);
    }
}

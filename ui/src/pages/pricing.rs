use rust_decimal::dec;
use yew::prelude::*;
use yewdux::prelude::*;

use crate::components::pricing_wizard::{BillingPeriod, PricingPlan, PricingWizard};
use crate::contexts::toast::use_toast;
use crate::state::{PRICING_STEPS, ShowcaseState};

const YEARLY_DISCOUNT_PERCENT: u8 = 20;

fn sample_plans() -> Vec<PricingPlan> {
    vec![
        PricingPlan {
            id: "starter".into(),
            name: "Starter".into(),
            monthly_price: dec!(0),
            features: vec!["1 project".into(), "Community support".into()],
            highlighted: false,
        },
        PricingPlan {
            id: "pro".into(),
            name: "Pro".into(),
            monthly_price: dec!(12.50),
            features: vec![
                "Unlimited projects".into(),
                "Email support".into(),
                "Usage reports".into(),
            ],
            highlighted: true,
        },
        PricingPlan {
            id: "team".into(),
            name: "Team".into(),
            monthly_price: dec!(39),
            features: vec![
                "Everything in Pro".into(),
                "Shared workspaces".into(),
                "Priority support".into(),
            ],
            highlighted: false,
        },
    ]
}

#[function_component]
pub fn PricingPage() -> Html {
    let (state, dispatch) = use_store::<ShowcaseState>();
    let toasts = use_toast();
    let plans = use_memo((), |_| sample_plans());

    let on_select_plan =
        dispatch.reduce_mut_callback_with(|state, id: AttrValue| {
            state.selected_plan = Some(id);
        });

    let on_billing_change =
        dispatch.reduce_mut_callback_with(|state, billing: BillingPeriod| {
            state.billing = billing;
        });

    let on_back: Callback<()> =
        dispatch.reduce_mut_callback(|state| state.previous_step());

    let on_next = {
        let state = state.clone();
        let dispatch = dispatch.clone();
        let plans = plans.clone();
        Callback::from(move |()| {
            if !state.is_last_step() {
                dispatch.reduce_mut(|state| state.next_step());
                return;
            }

            let plan_name = state
                .selected_plan
                .as_ref()
                .and_then(|id| plans.iter().find(|plan| &plan.id == id))
                .map(|plan| plan.name.to_string())
                .unwrap_or_default();
            if let Err(e) = toasts.success(format!("Subscribed to {plan_name}"))
            {
                tracing::error!("{e}");
            }
            dispatch.reduce_mut(|state| state.reset_wizard());
        })
    };

    html! {
        <PricingWizard
            steps={PRICING_STEPS.iter().map(|step| AttrValue::from(*step)).collect::<Vec<_>>()}
            current_step={state.wizard_step}
            plans={(*plans).clone()}
            selected_plan={state.selected_plan.clone()}
            billing={state.billing}
            yearly_discount_percent={YEARLY_DISCOUNT_PERCENT}
            on_select_plan={on_select_plan}
            on_billing_change={on_billing_change}
            on_back={on_back}
            on_next={on_next}
        />
    }
}

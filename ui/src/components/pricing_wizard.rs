use rust_decimal::{Decimal, RoundingStrategy};
use yew::prelude::*;

use crate::style::{StepStatus, step_style};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BillingPeriod {
    #[default]
    Monthly,
    Yearly,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PricingPlan {
    pub id: AttrValue,
    pub name: AttrValue,
    pub monthly_price: Decimal,
    pub features: Vec<AttrValue>,
    /// Visually emphasised (e.g., "most popular")
    pub highlighted: bool,
}

/// Index of the step to display, clamped to the available steps.
pub fn clamp_step(current: usize, step_count: usize) -> usize {
    current.min(step_count.saturating_sub(1))
}

pub fn step_status(index: usize, current: usize) -> StepStatus {
    match index.cmp(&current) {
        std::cmp::Ordering::Less => StepStatus::Complete,
        std::cmp::Ordering::Equal => StepStatus::Current,
        std::cmp::Ordering::Greater => StepStatus::Upcoming,
    }
}

pub const PRICE_UNAVAILABLE: &str = "n/a";

/// Formats a plan price for the billing period. Yearly prices are twelve
/// months less the discount, rounded to cents.
pub fn format_price(
    monthly_price: Decimal,
    billing: BillingPeriod,
    yearly_discount_percent: u8,
) -> String {
    match billing {
        BillingPeriod::Monthly => format!(
            "${:.2}/mo",
            monthly_price.round_dp_with_strategy(
                2,
                RoundingStrategy::MidpointAwayFromZero
            )
        ),
        BillingPeriod::Yearly => {
            let discount = Decimal::from(yearly_discount_percent.min(100));
            let yearly = monthly_price
                .checked_mul(Decimal::from(12))
                .and_then(|y| y.checked_mul(Decimal::ONE_HUNDRED - discount))
                .and_then(|y| y.checked_div(Decimal::ONE_HUNDRED));
            match yearly {
                Some(yearly) => format!(
                    "${:.2}/yr",
                    yearly.round_dp_with_strategy(
                        2,
                        RoundingStrategy::MidpointAwayFromZero
                    )
                ),
                None => {
                    tracing::warn!("yearly price overflows for {monthly_price}/mo");
                    PRICE_UNAVAILABLE.to_string()
                }
            }
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub steps: Vec<AttrValue>,
    pub current_step: usize,
    pub plans: Vec<PricingPlan>,
    #[prop_or_default]
    pub selected_plan: Option<AttrValue>,
    #[prop_or_default]
    pub billing: BillingPeriod,
    #[prop_or_default]
    pub yearly_discount_percent: u8,
    pub on_select_plan: Callback<AttrValue>,
    #[prop_or_default]
    pub on_billing_change: Option<Callback<BillingPeriod>>,
    pub on_back: Callback<()>,
    pub on_next: Callback<()>,
}

/// One screen of the plan selection wizard. Shows prices and steps computed
/// by the caller; holds no state.
#[function_component]
pub fn PricingWizard(props: &Props) -> Html {
    let current = clamp_step(props.current_step, props.steps.len());
    let is_first = current == 0;
    let is_last = current + 1 >= props.steps.len();

    let on_back = {
        let on_back = props.on_back.clone();
        Callback::from(move |_: MouseEvent| on_back.emit(()))
    };
    let on_next = {
        let on_next = props.on_next.clone();
        Callback::from(move |_: MouseEvent| on_next.emit(()))
    };

    let billing_button = |period: BillingPeriod, label: &'static str| {
        let active = props.billing == period;
        let onclick = props.on_billing_change.clone().map(|callback| {
            Callback::from(move |_: MouseEvent| callback.emit(period))
        });
        html! {
            <button
                type="button"
                onclick={onclick}
                class={classes!(
                    "px-3", "py-1", "text-sm", "rounded-md",
                    if active {
                        "bg-neutral-900 text-white dark:bg-neutral-100 dark:text-neutral-900"
                    } else {
                        "text-neutral-600 dark:text-neutral-400"
                    }
                )}
            >
                {label}
            </button>
        }
    };

    html! {
        <div class="space-y-8">
            <ol class="flex items-center gap-4">
                {for props.steps.iter().enumerate().map(|(index, name)| {
                    let style = step_style(step_status(index, current));
                    html! {
                        <li key={index.to_string()} class="flex items-center gap-2">
                            <span class={style.classes()}>{(index + 1).to_string()}</span>
                            <span class="text-sm text-neutral-700 dark:text-neutral-300">
                                {name}
                            </span>
                        </li>
                    }
                })}
            </ol>

            <div class="flex justify-center gap-2">
                {billing_button(BillingPeriod::Monthly, "Monthly")}
                {billing_button(BillingPeriod::Yearly, "Yearly")}
                if props.yearly_discount_percent > 0 {
                    <span class="self-center text-xs text-green-700 dark:text-green-400">
                        {format!("Save {}% yearly", props.yearly_discount_percent.min(100))}
                    </span>
                }
            </div>

            <div class="grid gap-4 md:grid-cols-3">
                {for props.plans.iter().map(|plan| {
                    let selected = props.selected_plan.as_ref() == Some(&plan.id);
                    let onclick = {
                        let on_select_plan = props.on_select_plan.clone();
                        let id = plan.id.clone();
                        Callback::from(move |_: MouseEvent| on_select_plan.emit(id.clone()))
                    };
                    html! {
                        <button
                            key={plan.id.to_string()}
                            type="button"
                            onclick={onclick}
                            aria-pressed={selected.to_string()}
                            class={classes!(
                                "text-left", "p-6", "rounded-lg", "border", "transition-colors",
                                if selected {
                                    "border-neutral-900 dark:border-neutral-100 ring-2 ring-neutral-900"
                                } else {
                                    "border-neutral-200 dark:border-neutral-700"
                                },
                                plan.highlighted.then_some("shadow-lg")
                            )}
                        >
                            <h3 class="text-lg font-semibold text-neutral-900 dark:text-white">
                                {&plan.name}
                            </h3>
                            <p class="mt-2 text-2xl font-bold text-neutral-900 dark:text-white">
                                {format_price(plan.monthly_price, props.billing, props.yearly_discount_percent)}
                            </p>
                            <ul class="mt-4 space-y-1 text-sm text-neutral-600 dark:text-neutral-400">
                                {for plan.features.iter().map(|feature| html! {
                                    <li>{"✓ "}{feature}</li>
                                })}
                            </ul>
                        </button>
                    }
                })}
            </div>

            <div class="flex justify-between">
                <button
                    type="button"
                    onclick={on_back}
                    disabled={is_first}
                    class="px-4 py-2 text-sm font-medium rounded-md border border-neutral-300 \
                           dark:border-neutral-600 disabled:opacity-50 disabled:cursor-not-allowed"
                >
                    {"Back"}
                </button>
                <button
                    type="button"
                    onclick={on_next}
                    disabled={props.selected_plan.is_none()}
                    class="px-4 py-2 text-sm font-medium text-white rounded-md bg-neutral-900 \
                           dark:bg-neutral-100 dark:text-neutral-900 \
                           disabled:opacity-50 disabled:cursor-not-allowed"
                >
                    {if is_last { "Finish" } else { "Next" }}
                </button>
            </div>
        </div>
    }
}

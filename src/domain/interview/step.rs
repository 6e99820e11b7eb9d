//! StepRegistry - The fixed, ordered list of interview questions.
//!
//! The interview walks through 9 steps oriented around objects and events.
//! Both the wizard and the summary view read this registry; nothing else
//! keeps its own copy of the step list.
//!
//! # Step Order
//!
//! 1. Actor → 2. Command → 3. Business object → 4. Attributes → 5. Event →
//! 6. Reaction → 7. Systems → 8. Visibility → 9. Fragility

use crate::domain::foundation::StepKey;

/// Static descriptor of one interview question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepDescriptor {
    pub key: StepKey,
    pub title: &'static str,
    pub prompt: &'static str,
    pub helper: Option<&'static str>,
    pub placeholder: Option<&'static str>,
}

const STEPS: [StepDescriptor; 9] = [
    StepDescriptor {
        key: StepKey::Actor,
        title: "Actor",
        prompt: "Who actually initiates this action?",
        helper: Some("A person, role, team... or a system when automated."),
        placeholder: Some("e.g. After-sales manager, Customer, WMS, Nightly batch..."),
    },
    StepDescriptor {
        key: StepKey::Command,
        title: "Command",
        prompt: "Which explicit command is issued?",
        helper: Some("An infinitive verb. One clear action."),
        placeholder: Some("e.g. Create order, Validate invoice, Allocate stock..."),
    },
    StepDescriptor {
        key: StepKey::BusinessObject,
        title: "Business object",
        prompt: "Which business object does this command act on?",
        helper: Some("The semantic core: order, invoice, contract, delivery..."),
        placeholder: Some("e.g. Order, Invoice, Contract, Stock, Delivery..."),
    },
    StepDescriptor {
        key: StepKey::ObjectAttributes,
        title: "Attributes",
        prompt: "Which attributes are essential for this to work?",
        helper: Some("Short list. Status, date, amount, quantity, priority..."),
        placeholder: Some("e.g. status, createdAt, amount, currency, channel..."),
    },
    StepDescriptor {
        key: StepKey::Event,
        title: "Event",
        prompt: "Which observable event confirms the command was executed?",
        helper: Some("A real, traceable, datable fact (not an intention)."),
        placeholder: Some("e.g. Order created, Stock reserved, Invoice validated..."),
    },
    StepDescriptor {
        key: StepKey::Reaction,
        title: "Reaction",
        prompt: "What does this event trigger elsewhere?",
        helper: Some("Propagation: notifications, allocations, triggers, workflows..."),
        placeholder: Some("e.g. Start picking, Notify logistics, Create delivery..."),
    },
    StepDescriptor {
        key: StepKey::Systems,
        title: "Systems",
        prompt: "Which systems are involved at each step?",
        helper: Some("Name the applications (and their role if possible)."),
        placeholder: Some("e.g. E-Collect (capture), WMS (allocation), ERP (invoicing)..."),
    },
    StepDescriptor {
        key: StepKey::Visibility,
        title: "Visibility",
        prompt: "Who sees what, and when?",
        helper: Some("Audience and timing: real time, batch, delay, dependencies..."),
        placeholder: Some("e.g. Logistics sees it in real time; Finance D+1; Customer D0..."),
    },
    StepDescriptor {
        key: StepKey::Fragility,
        title: "Fragility",
        prompt: "When does this go wrong, happen too late, or not at all?",
        helper: Some("Concrete cases and impact: cash, customer, operations, compliance..."),
        placeholder: Some("e.g. stock not reserved -> late delivery -> penalties..."),
    },
];

/// Central location for step ordering and lookup.
pub struct StepRegistry;

impl StepRegistry {
    /// Returns all step descriptors in interview order.
    pub fn all() -> &'static [StepDescriptor] {
        &STEPS
    }

    /// Number of steps in the interview.
    pub fn len() -> usize {
        STEPS.len()
    }

    /// Index of the final step.
    pub fn last_index() -> usize {
        STEPS.len() - 1
    }

    /// Returns the descriptor at `index`, if in range.
    pub fn get(index: usize) -> Option<&'static StepDescriptor> {
        STEPS.get(index)
    }

    /// Returns the descriptor at `index` after clamping it into range.
    pub fn at(index: usize) -> &'static StepDescriptor {
        &STEPS[Self::clamp_index(index)]
    }

    /// Returns the descriptor for a step key.
    pub fn descriptor(key: StepKey) -> &'static StepDescriptor {
        &STEPS[Self::index_of(key)]
    }

    /// Returns the position of a step key in the interview.
    pub fn index_of(key: StepKey) -> usize {
        key.order_index()
    }

    /// Clamps an arbitrary index to `[0, len - 1]`.
    pub fn clamp_index(index: usize) -> usize {
        index.min(Self::last_index())
    }

    /// Returns true if `index` designates the final step.
    pub fn is_last(index: usize) -> bool {
        index >= Self::last_index()
    }
}

use serde::{Deserialize, Serialize};

/// Fulfillment stages shown on the order tracking timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrackingStage {
    Confirmed,
    Preparing,
    OutForDelivery,
    Delivered,
}

impl TrackingStage {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::Confirmed,
            Self::Preparing,
            Self::OutForDelivery,
            Self::Delivered,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Confirmed => "Order Confirmed",
            Self::Preparing => "Preparing Order",
            Self::OutForDelivery => "Out for Delivery",
            Self::Delivered => "Delivered",
        }
    }
}

/// High level status tracked for a placed order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    Active,
    Completed,
}

impl OrderStatus {
    pub const fn label(self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Active => "active",
            OrderStatus::Completed => "completed",
        }
    }
}

/// Rendering state of a single timeline stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StepState {
    Completed,
    Active,
    Upcoming,
}

#[derive(Debug, Clone, Serialize)]
pub struct TimelineStep {
    pub stage: TrackingStage,
    pub label: &'static str,
    pub state: StepState,
}

/// Renders the four stages against a completed-stage counter: stages below the
/// counter are done, the stage at the counter is in flight, the rest upcoming.
pub fn timeline(progress: usize) -> Vec<TimelineStep> {
    TrackingStage::ordered()
        .into_iter()
        .enumerate()
        .map(|(index, stage)| {
            let state = if index < progress {
                StepState::Completed
            } else if index == progress {
                StepState::Active
            } else {
                StepState::Upcoming
            };
            TimelineStep {
                stage,
                label: stage.label(),
                state,
            }
        })
        .collect()
}

/// Star rating left against a completed order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    stars: u8,
    comment: String,
}

impl Rating {
    /// The star widget offers one through five; anything else is rejected.
    pub fn new(stars: u8, comment: impl Into<String>) -> Result<Self, RatingError> {
        if !(1..=5).contains(&stars) {
            return Err(RatingError::OutOfRange(stars));
        }

        Ok(Self {
            stars,
            comment: comment.into(),
        })
    }

    pub fn stars(&self) -> u8 {
        self.stars
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RatingError {
    #[error("star rating {0} is outside the 1-5 range")]
    OutOfRange(u8),
}

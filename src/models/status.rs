use serde::{Deserialize, Serialize};

use crate::error::{DeskError, Result};

/// Closed label enum whose serde name is the exact display string.
macro_rules! labeled_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $label:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $label)]
                $variant,
            )+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }

            pub fn badge_class(self) -> String {
                crate::utils::badge_class(self.as_str())
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = DeskError;

            fn from_str(value: &str) -> Result<Self> {
                $name::ALL
                    .iter()
                    .copied()
                    .find(|candidate| candidate.as_str() == value)
                    .ok_or_else(|| DeskError::UnknownLabel {
                        kind: stringify!($name),
                        value: value.to_string(),
                    })
            }
        }
    };
}

labeled_enum!(
    /// Vendor segment. Procurements reuse it for their type.
    VendorType {
        It => "IT",
        NonIt => "Non-IT",
        NonBanking => "Non-Banking",
    }
);

labeled_enum!(VendorStatus {
    Active => "Active",
    Inactive => "Inactive",
    UnderReview => "Under Review",
});

labeled_enum!(ProcurementStatus {
    Draft => "Draft",
    Pending => "Pending",
    InProgress => "In Progress",
    Approved => "Approved",
});

labeled_enum!(
    /// Declaration order is the workflow order.
    ProcurementStage {
        RequirementGathering => "Requirement Gathering",
        CommitteeReview => "Committee Review",
        RfpPublished => "RFP Published",
        TechnicalEvaluation => "Technical Evaluation",
        ContractFinalization => "Contract Finalization",
    }
);

labeled_enum!(SlaStatus {
    Exceeded => "Exceeded",
    OnTrack => "On Track",
    AtRisk => "At Risk",
    Breached => "Breached",
});

labeled_enum!(BillingStatus {
    Pending => "Pending",
    Approved => "Approved",
    Paid => "Paid",
    OnHold => "On Hold",
    Rejected => "Rejected",
});

labeled_enum!(RiskLevel {
    Low => "Low",
    Medium => "Medium",
    High => "High",
});

labeled_enum!(ComplianceStatus {
    Passed => "passed",
    Failed => "failed",
    Pending => "pending",
});

labeled_enum!(ActivityKind {
    Success => "success",
    Warning => "warning",
    Info => "info",
    Danger => "danger",
});

pub const LOW_RISK_CEILING: u8 = 33;
pub const MEDIUM_RISK_CEILING: u8 = 66;

impl RiskLevel {
    pub fn from_score(score: u8) -> Self {
        if score <= LOW_RISK_CEILING {
            RiskLevel::Low
        } else if score <= MEDIUM_RISK_CEILING {
            RiskLevel::Medium
        } else {
            RiskLevel::High
        }
    }
}

impl ProcurementStage {
    pub const INITIAL: ProcurementStage = ProcurementStage::RequirementGathering;
    pub const TERMINAL: ProcurementStage = ProcurementStage::ContractFinalization;

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn progress_percent(self) -> u8 {
        (self.index() * 25) as u8
    }

    pub fn is_terminal(self) -> bool {
        self == Self::TERMINAL
    }

    pub fn next(self) -> Option<Self> {
        Self::ALL.get(self.index() + 1).copied()
    }

    /// Moves forward to `target`. Stages may be skipped but never revisited.
    pub fn advance_to(self, target: Self) -> Result<Self> {
        if target > self {
            Ok(target)
        } else {
            Err(DeskError::InvalidTransition {
                from: self.as_str(),
                to: target.as_str(),
            })
        }
    }
}

impl SlaStatus {
    /// Statuses under which a penalty may legitimately accrue.
    pub fn allows_penalty(self) -> bool {
        matches!(self, SlaStatus::AtRisk | SlaStatus::Breached)
    }
}

// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use serde::{Deserialize, Serialize};

use crate::ids::RepId;

/// Display bucket for a deal status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DealOutcome {
    Won,
    Lost,
    Open,
}

/// Deal status as the service labels it. The two closed labels are
/// recognized exactly; anything else counts as in progress and keeps
/// its original label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DealStatus {
    ClosedWon,
    ClosedLost,
    InProgress(String),
}

impl DealStatus {
    pub fn parse(value: &str) -> Self {
        match value {
            "Closed Won" => Self::ClosedWon,
            "Closed Lost" => Self::ClosedLost,
            other => Self::InProgress(other.to_owned()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::ClosedWon => "Closed Won",
            Self::ClosedLost => "Closed Lost",
            Self::InProgress(label) => label,
        }
    }

    pub const fn outcome(&self) -> DealOutcome {
        match self {
            Self::ClosedWon => DealOutcome::Won,
            Self::ClosedLost => DealOutcome::Lost,
            Self::InProgress(_) => DealOutcome::Open,
        }
    }
}

impl From<String> for DealStatus {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<DealStatus> for String {
    fn from(status: DealStatus) -> Self {
        status.label().to_owned()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deal {
    pub client: String,
    pub value: i64,
    pub status: DealStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    pub name: String,
    pub industry: String,
    pub contact: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Representative {
    pub id: RepId,
    pub name: String,
    pub role: String,
    pub region: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub deals: Vec<Deal>,
    #[serde(default)]
    pub clients: Vec<Client>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopPerformer {
    pub name: String,
    pub won_value: i64,
}

/// Roster-wide aggregates: region coverage, deal counts by outcome,
/// pipeline value, and the representative with the highest closed-won
/// value (earliest wins ties).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterSummary {
    pub rep_count: usize,
    pub regions: Vec<String>,
    pub deals_won: usize,
    pub deals_lost: usize,
    pub deals_open: usize,
    pub total_value: i64,
    pub top_performer: Option<TopPerformer>,
}

impl RosterSummary {
    pub fn from_reps(reps: &[Representative]) -> Self {
        let mut regions: Vec<String> = Vec::new();
        let mut deals_won = 0;
        let mut deals_lost = 0;
        let mut deals_open = 0;
        let mut total_value = 0;
        let mut top_performer: Option<TopPerformer> = None;

        for rep in reps {
            if !regions.contains(&rep.region) {
                regions.push(rep.region.clone());
            }
            let mut won_value = 0;
            for deal in &rep.deals {
                total_value += deal.value;
                match deal.status.outcome() {
                    DealOutcome::Won => {
                        deals_won += 1;
                        won_value += deal.value;
                    }
                    DealOutcome::Lost => deals_lost += 1,
                    DealOutcome::Open => deals_open += 1,
                }
            }
            if top_performer
                .as_ref()
                .is_none_or(|top| won_value > top.won_value)
            {
                top_performer = Some(TopPerformer {
                    name: rep.name.clone(),
                    won_value,
                });
            }
        }

        Self {
            rep_count: reps.len(),
            regions,
            deals_won,
            deals_lost,
            deals_open,
            total_value,
            top_performer,
        }
    }

    pub const fn deal_count(&self) -> usize {
        self.deals_won + self.deals_lost + self.deals_open
    }
}

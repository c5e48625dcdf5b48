// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::Result;
use repboard_api::Client;
use repboard_app::{Representative, RosterSummary};
use repboard_tui::{AnswerEvent, AppRuntime, InternalEvent, RosterEvent};
use std::sync::mpsc::Sender;
use std::thread;

/// Production runtime. The blocking HTTP calls run on worker threads
/// with a cloned client so the UI loop keeps polling while a request
/// is outstanding.
pub struct HttpRuntime {
    client: Client,
}

impl HttpRuntime {
    pub const fn new(client: Client) -> Self {
        Self { client }
    }
}

impl AppRuntime for HttpRuntime {
    fn fetch_sales_reps(&mut self) -> Result<Vec<Representative>> {
        self.client.fetch_sales_reps()
    }

    fn answer_question(&mut self, question: &str) -> Result<String> {
        self.client.ask(question)
    }

    fn spawn_roster_fetch(&mut self, tx: Sender<InternalEvent>) -> Result<()> {
        let client = self.client.clone();
        thread::spawn(move || {
            let event = match client.fetch_sales_reps() {
                Ok(reps) => InternalEvent::Roster(RosterEvent::Loaded(reps)),
                Err(error) => InternalEvent::Roster(RosterEvent::Failed {
                    error: format!("{error:#}"),
                }),
            };
            // The receiver is gone once the UI has shut down.
            let _ = tx.send(event);
        });
        Ok(())
    }

    fn spawn_answer(
        &mut self,
        request_id: u64,
        question: &str,
        tx: Sender<InternalEvent>,
    ) -> Result<()> {
        let client = self.client.clone();
        let question = question.to_owned();
        thread::spawn(move || {
            let event = match client.ask(&question) {
                Ok(answer) => InternalEvent::Answer(AnswerEvent::Answered { request_id, answer }),
                Err(error) => InternalEvent::Answer(AnswerEvent::Failed {
                    request_id,
                    error: format!("{error:#}"),
                }),
            };
            let _ = tx.send(event);
        });
        Ok(())
    }
}

/// Offline runtime for `--demo`: a deterministic generated roster, and
/// answers computed locally from that roster.
pub struct DemoRuntime {
    roster: Vec<Representative>,
}

impl DemoRuntime {
    pub fn new(seed: u64, count: usize) -> Self {
        Self {
            roster: repboard_testkit::sample_roster(seed, count),
        }
    }
}

impl AppRuntime for DemoRuntime {
    fn fetch_sales_reps(&mut self) -> Result<Vec<Representative>> {
        Ok(self.roster.clone())
    }

    fn answer_question(&mut self, question: &str) -> Result<String> {
        Ok(demo_answer(question, &self.roster))
    }
}

fn demo_answer(question: &str, roster: &[Representative]) -> String {
    let summary = RosterSummary::from_reps(roster);
    let regions = if summary.regions.is_empty() {
        "-".to_owned()
    } else {
        summary.regions.join(", ")
    };
    let top = match &summary.top_performer {
        Some(top) => format!("{} (${} in won deals)", top.name, top.won_value),
        None => "-".to_owned(),
    };
    format!(
        "Demo mode answer for {question:?}: {} reps covering {regions}; {} deals won, {} lost, {} in progress; total pipeline value ${}; top performer {top}.",
        summary.rep_count,
        summary.deals_won,
        summary.deals_lost,
        summary.deals_open,
        summary.total_value,
    )
}

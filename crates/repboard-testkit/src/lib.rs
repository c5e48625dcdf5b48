// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use repboard_app::{Client, Deal, DealStatus, RepId, Representative};

const FIRST_NAMES: [&str; 16] = [
    "Avery", "Jordan", "Taylor", "Riley", "Morgan", "Casey", "Alex", "Quinn", "Parker", "Drew",
    "Kai", "Elliot", "Robin", "Cameron", "Hayden", "Rowan",
];
const LAST_NAMES: [&str; 18] = [
    "Walker", "Martin", "Hill", "Evans", "Lopez", "Gray", "Ward", "Young", "Diaz", "Reed",
    "Campbell", "Turner", "Flores", "Bennett", "Price", "Morris", "Foster", "Brooks",
];

const ROLES: [&str; 6] = [
    "Senior Sales Executive",
    "Account Executive",
    "Account Manager",
    "Sales Representative",
    "Regional Sales Lead",
    "Business Development Manager",
];

const REGIONS: [&str; 6] = [
    "North America",
    "Europe",
    "Asia-Pacific",
    "South America",
    "Middle East",
    "Africa",
];

const SKILLS: [&str; 10] = [
    "Negotiation",
    "CRM",
    "Client Relations",
    "Lead Generation",
    "Presentations",
    "Forecasting",
    "Prospecting",
    "Cold Calling",
    "Closing",
    "Networking",
];

const COMPANY_STEMS: [&str; 12] = [
    "Acme", "Globex", "Initech", "Umbrella", "Vehement", "Soylent", "Stark", "Tyrell",
    "Cyberdyne", "Wonka", "Hooli", "Vandelay",
];
const COMPANY_SUFFIXES: [&str; 6] = ["Corp", "Inc", "Ltd", "Group", "Industries", "Partners"];

const INDUSTRIES: [&str; 10] = [
    "Retail",
    "Manufacturing",
    "Healthcare",
    "Finance",
    "Technology",
    "Logistics",
    "Energy",
    "Education",
    "Hospitality",
    "Agriculture",
];

#[derive(Debug, Clone)]
struct DeterministicRng {
    state: u64,
}

impl DeterministicRng {
    fn new(seed: u64) -> Self {
        let mut state = seed ^ 0x9E37_79B9_7F4A_7C15;
        if state == 0 {
            state = 0xA409_3822_299F_31D0;
        }
        Self { state }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);

        let mut x = self.state;
        x ^= x >> 13;
        x ^= x << 7;
        x ^= x >> 17;
        x
    }

    fn int_n(&mut self, n: usize) -> usize {
        if n <= 1 {
            return 0;
        }
        (self.next_u64() % (n as u64)) as usize
    }
}

/// Deterministic roster generator. The same seed always yields the same
/// roster, so demo mode and tests stay reproducible.
#[derive(Debug, Clone)]
pub struct RosterFaker {
    rng: DeterministicRng,
    seed: u64,
}

impl RosterFaker {
    pub fn new(seed: u64) -> Self {
        let normalized = if seed == 0 { 1 } else { seed };
        Self {
            rng: DeterministicRng::new(normalized),
            seed: normalized,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn representative(&mut self, id: i64) -> Representative {
        let name = format!("{} {}", self.pick(&FIRST_NAMES), self.pick(&LAST_NAMES));
        let role = self.pick(&ROLES).to_owned();
        let region = self.pick(&REGIONS).to_owned();

        let skill_count = 2 + self.rng.int_n(3);
        let mut skills: Vec<String> = Vec::new();
        while skills.len() < skill_count {
            let skill = self.pick(&SKILLS).to_owned();
            if !skills.contains(&skill) {
                skills.push(skill);
            }
        }

        let deal_count = 1 + self.rng.int_n(4);
        let deals = (0..deal_count).map(|_| self.deal()).collect();
        let client_count = 1 + self.rng.int_n(3);
        let clients = (0..client_count).map(|_| self.client()).collect();

        Representative {
            id: RepId::new(id),
            name,
            role,
            region,
            skills,
            deals,
            clients,
        }
    }

    pub fn deal(&mut self) -> Deal {
        let status = match self.rng.int_n(3) {
            0 => DealStatus::ClosedWon,
            1 => DealStatus::ClosedLost,
            _ => DealStatus::InProgress("In Progress".to_owned()),
        };

        Deal {
            client: self.company_name(),
            value: self.int_range_i64(10, 500) * 500,
            status,
        }
    }

    pub fn client(&mut self) -> Client {
        let company = self.company_name();
        let domain = company
            .split_whitespace()
            .next()
            .unwrap_or("contact")
            .to_lowercase();
        let contact = format!("{}@{domain}.com", self.pick(&FIRST_NAMES).to_lowercase());

        Client {
            name: company,
            industry: self.pick(&INDUSTRIES).to_owned(),
            contact,
        }
    }

    fn company_name(&mut self) -> String {
        format!(
            "{} {}",
            self.pick(&COMPANY_STEMS),
            self.pick(&COMPANY_SUFFIXES)
        )
    }

    fn pick<'a>(&mut self, items: &'a [&'a str]) -> &'a str {
        items[self.rng.int_n(items.len())]
    }

    fn int_range_i64(&mut self, min: i64, max: i64) -> i64 {
        if max <= min {
            return min;
        }
        let span = max - min + 1;
        min + (self.rng.next_u64() % (span as u64)) as i64
    }
}

pub fn sample_roster(seed: u64, count: usize) -> Vec<Representative> {
    let mut faker = RosterFaker::new(seed);
    (0..count)
        .map(|index| faker.representative(index as i64 + 1))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{RosterFaker, sample_roster};
    use std::collections::BTreeSet;

    #[test]
    fn same_seed_same_roster() {
        assert_eq!(sample_roster(42, 5), sample_roster(42, 5));
    }

    #[test]
    fn different_seeds_vary() {
        let names: BTreeSet<String> = (0..32)
            .flat_map(|seed| sample_roster(seed, 3))
            .map(|rep| rep.name)
            .collect();
        assert!(names.len() > 8);
    }

    #[test]
    fn zero_seed_is_normalized() {
        assert_eq!(sample_roster(0, 2), sample_roster(1, 2));
        assert_eq!(RosterFaker::new(0).seed(), 1);
    }

    #[test]
    fn representative_fields_populated() {
        let mut faker = RosterFaker::new(7);
        let rep = faker.representative(3);

        assert_eq!(rep.id.get(), 3);
        assert!(!rep.name.is_empty());
        assert!(!rep.role.is_empty());
        assert!(!rep.region.is_empty());
        assert!((2..=4).contains(&rep.skills.len()));
        assert!((1..=4).contains(&rep.deals.len()));
        assert!((1..=3).contains(&rep.clients.len()));

        let unique: BTreeSet<&String> = rep.skills.iter().collect();
        assert_eq!(unique.len(), rep.skills.len());
    }

    #[test]
    fn deal_values_are_round_and_bounded() {
        let mut faker = RosterFaker::new(9);
        for _ in 0..50 {
            let deal = faker.deal();
            assert!((5_000..=250_000).contains(&deal.value));
            assert_eq!(deal.value % 500, 0);
        }
    }

    #[test]
    fn contacts_are_email_shaped() {
        let mut faker = RosterFaker::new(11);
        for _ in 0..20 {
            let client = faker.client();
            assert!(client.contact.contains('@'));
            assert!(client.contact.ends_with(".com"));
        }
    }
}

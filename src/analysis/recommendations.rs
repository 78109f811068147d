//! Mitigation strategy selection.
//!
//! The suggestion text is fixed; only the inclusion of the energy, operational
//! and carbon blocks depends on the analysed facility.

use super::models::{OperatingParameters, PollutionEstimate, RecommendationSection};

const BANNER_TITLE: &str = "GENERATIVE ENHANCEMENT STRATEGIES";
const BANNER_WIDTH: usize = 60;

const GREEN_INFRASTRUCTURE: RecommendationBlock = RecommendationBlock {
    title: "🏗️  SMART GREEN INFRASTRUCTURE:",
    lines: &[
        "  • Deploy AI-optimized vertical gardens on factory walls",
        "  • Install modular green roof systems with IoT monitoring",
        "  • Create micro-forest zones around perimeter using native species",
        "  • Implement rainwater harvesting with automated irrigation",
    ],
};

const AIR_PURIFICATION: RecommendationBlock = RecommendationBlock {
    title: "🌬️  INNOVATIVE AIR PURIFICATION:",
    lines: &[
        "  • Install electrostatic precipitators with HEPA-14 filters",
        "  • Deploy photocatalytic oxidation units near emission sources",
        "  • Use bio-filtration with engineered microbial communities",
        "  • Implement atmospheric water generators for humidity control",
    ],
};

const ENERGY_TRANSFORMATION: RecommendationBlock = RecommendationBlock {
    title: "⚡ ENERGY TRANSFORMATION PATH:",
    lines: &[
        "  • Phase 1: Convert 30% to biomass gasification",
        "  • Phase 2: Install onsite solar micro-grid (500kW)",
        "  • Phase 3: Implement waste-heat recovery systems",
        "  • Phase 4: Deploy hydrogen fuel cell backup",
    ],
};

const OPERATIONAL_TITLE: &str = "🔧 OPERATIONAL ENHANCEMENTS:";

const EFFICIENCY_UPGRADES: &[&str] = &[
    "  • Upgrade to Industry 4.0 automation systems",
    "  • Implement predictive maintenance using ML algorithms",
    "  • Optimize thermal efficiency with ceramic coatings",
];

const QUALITY_MONITORING: &[&str] = &[
    "  • Establish real-time material quality monitoring",
    "  • Implement closed-loop material recycling system",
    "  • Develop supplier sustainability scoring",
];

const MAINTENANCE_SCHEDULE: &[&str] = &[
    "  • Schedule mandatory maintenance every 3 months",
    "  • Create digital twin for equipment health monitoring",
];

const ECOLOGICAL_SYNERGY: RecommendationBlock = RecommendationBlock {
    title: "🌿 ECOLOGICAL SYNERGY PROJECTS:",
    lines: &[
        "  • Create pollinator habitats with native flowering plants",
        "  • Establish mycoremediation zones for soil detoxification",
        "  • Install bird/bat houses for natural pest control",
        "  • Develop educational eco-trail for community engagement",
    ],
};

const CARBON_MANAGEMENT: RecommendationBlock = RecommendationBlock {
    title: "♻️ CARBON MANAGEMENT SOLUTIONS:",
    lines: &[
        "  • Install direct air capture units in high-emission areas",
        "  • Create algae photobioreactors for CO₂ sequestration",
        "  • Implement blockchain-based carbon credit tracking",
        "  • Develop circular economy partnerships",
    ],
};

/// Sections emitted after the carbon block, in order.
const CLOSING_BLOCKS: [RecommendationBlock; 6] = [
    RecommendationBlock {
        title: "👥 WORKFORCE WELLBEING PROGRAM:",
        lines: &[
            "  • Establish indoor air quality monitoring in all work areas",
            "  • Create green break areas with living walls",
            "  • Implement mandatory environmental training",
            "  • Develop incentive programs for green innovation",
        ],
    },
    RecommendationBlock {
        title: "🤝 COMMUNITY COLLABORATION:",
        lines: &[
            "  • Sponsor urban reforestation in adjacent neighborhoods",
            "  • Create joint air quality monitoring network",
            "  • Establish community garden with excess rainwater",
            "  • Develop transparency portal for environmental metrics",
        ],
    },
    RecommendationBlock {
        title: "📊 INTELLIGENT MONITORING SYSTEM:",
        lines: &[
            "  • Deploy network of IoT air quality sensors",
            "  • Implement real-time emissions dashboard",
            "  • Use satellite imagery for environmental impact assessment",
            "  • Create predictive analytics for pollution forecasting",
        ],
    },
    RecommendationBlock {
        title: "🚀 LONG-TERM INNOVATION PATH:",
        lines: &[
            "  • Year 1: Baseline assessment & pilot projects",
            "  • Year 2: Technology deployment & optimization",
            "  • Year 3: Scaling successful initiatives",
            "  • Year 5: Net-zero emissions target",
        ],
    },
    RecommendationBlock {
        title: "💰 FINANCIAL CONSIDERATIONS:",
        lines: &[
            "  • Estimated ROI: 3-5 years through efficiency gains",
            "  • Available government incentives for green technology",
            "  • Potential carbon credit revenue: $50K-$200K annually",
            "  • Insurance premium reduction: 15-25% possible",
        ],
    },
    RecommendationBlock {
        title: "📅 RECOMMENDED IMPLEMENTATION:",
        lines: &[
            "  • Immediate (1 month): Employee training & baseline audit",
            "  • Short-term (3 months): Quick-win green infrastructure",
            "  • Medium-term (12 months): Major technology deployment",
            "  • Long-term (24+ months): Full transformation",
        ],
    },
];

/// Static section template.
struct RecommendationBlock {
    title: &'static str,
    lines: &'static [&'static str],
}

impl RecommendationBlock {
    fn to_section(&self) -> RecommendationSection {
        RecommendationSection {
            title: self.title,
            lines: self.lines.to_vec(),
        }
    }
}

/// Fuel consumption (liters) above which the energy transformation path applies.
const FUEL_THRESHOLD: f64 = 1000.0;
const EFFICIENCY_THRESHOLD: f64 = 85.0;
const QUALITY_THRESHOLD: f64 = 80.0;
const MAINTENANCE_THRESHOLD: f64 = 0.5;
const CO_THRESHOLD: f64 = 5.0;
const AQI_THRESHOLD: u16 = 100;

/// Select the mitigation sections for an analysed facility.
pub fn select_recommendations(
    params: &OperatingParameters,
    pollution: &PollutionEstimate,
    aqi: u16,
) -> Vec<RecommendationSection> {
    let mut sections = vec![GREEN_INFRASTRUCTURE.to_section(), AIR_PURIFICATION.to_section()];

    if params.fuel > FUEL_THRESHOLD {
        sections.push(ENERGY_TRANSFORMATION.to_section());
    }

    let mut operational = Vec::new();
    if params.efficiency < EFFICIENCY_THRESHOLD {
        operational.extend_from_slice(EFFICIENCY_UPGRADES);
    }
    if params.quality < QUALITY_THRESHOLD {
        operational.extend_from_slice(QUALITY_MONITORING);
    }
    if params.maintenance < MAINTENANCE_THRESHOLD {
        operational.extend_from_slice(MAINTENANCE_SCHEDULE);
    }
    sections.push(RecommendationSection {
        title: OPERATIONAL_TITLE,
        lines: operational,
    });

    sections.push(ECOLOGICAL_SYNERGY.to_section());

    if pollution.co > CO_THRESHOLD || aqi > AQI_THRESHOLD {
        sections.push(CARBON_MANAGEMENT.to_section());
    }

    sections.extend(CLOSING_BLOCKS.iter().map(RecommendationBlock::to_section));
    sections
}

/// Flatten sections into display lines: a banner, then each section
/// separated from the next by a blank line.
pub fn render_lines(sections: &[RecommendationSection]) -> Vec<String> {
    let rule = "=".repeat(BANNER_WIDTH);
    let mut lines = vec![rule.clone(), BANNER_TITLE.to_string(), rule, String::new()];

    for (i, section) in sections.iter().enumerate() {
        if i > 0 {
            lines.push(String::new());
        }
        lines.push(section.title.to_string());
        lines.extend(section.lines.iter().map(|line| line.to_string()));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::models::LineKind;

    fn clean_pollution() -> PollutionEstimate {
        PollutionEstimate {
            pm25: 1.0,
            so2: 1.0,
            nox: 1.0,
            co: 1.0,
        }
    }

    /// A facility that triggers none of the conditional blocks.
    fn compliant_params() -> OperatingParameters {
        OperatingParameters {
            fuel: 500.0,
            efficiency: 90.0,
            quality: 90.0,
            maintenance: 1.0,
            ..Default::default()
        }
    }

    fn titles(sections: &[RecommendationSection]) -> Vec<&'static str> {
        sections.iter().map(|s| s.title).collect()
    }

    #[test]
    fn test_unconditional_sections_only() {
        let sections = select_recommendations(&compliant_params(), &clean_pollution(), 40);

        assert_eq!(
            titles(&sections),
            vec![
                "🏗️  SMART GREEN INFRASTRUCTURE:",
                "🌬️  INNOVATIVE AIR PURIFICATION:",
                "🔧 OPERATIONAL ENHANCEMENTS:",
                "🌿 ECOLOGICAL SYNERGY PROJECTS:",
                "👥 WORKFORCE WELLBEING PROGRAM:",
                "🤝 COMMUNITY COLLABORATION:",
                "📊 INTELLIGENT MONITORING SYSTEM:",
                "🚀 LONG-TERM INNOVATION PATH:",
                "💰 FINANCIAL CONSIDERATIONS:",
                "📅 RECOMMENDED IMPLEMENTATION:",
            ]
        );
        // Operational header is emitted even with no lines under it
        assert!(sections[2].lines.is_empty());
    }

    #[test]
    fn test_energy_block_fuel_boundary() {
        let at_threshold = OperatingParameters {
            fuel: 1000.0,
            ..compliant_params()
        };
        let above = OperatingParameters {
            fuel: 1000.01,
            ..compliant_params()
        };

        let sections = select_recommendations(&at_threshold, &clean_pollution(), 40);
        assert!(!titles(&sections).contains(&ENERGY_TRANSFORMATION.title));

        let sections = select_recommendations(&above, &clean_pollution(), 40);
        assert_eq!(sections[2].title, ENERGY_TRANSFORMATION.title);
        assert_eq!(sections[2].lines.len(), 4);
    }

    #[test]
    fn test_operational_lines() {
        let params = OperatingParameters {
            efficiency: 84.9,
            quality: 79.9,
            maintenance: 0.49,
            ..compliant_params()
        };
        let sections = select_recommendations(&params, &clean_pollution(), 40);
        let operational = &sections[2];

        assert_eq!(operational.title, OPERATIONAL_TITLE);
        assert_eq!(operational.lines.len(), 8);
        assert_eq!(operational.lines[0], EFFICIENCY_UPGRADES[0]);
        assert_eq!(operational.lines[3], QUALITY_MONITORING[0]);
        assert_eq!(operational.lines[6], MAINTENANCE_SCHEDULE[0]);
    }

    #[test]
    fn test_operational_thresholds_are_strict() {
        let params = OperatingParameters {
            efficiency: 85.0,
            quality: 80.0,
            maintenance: 0.5,
            ..compliant_params()
        };
        // Maintenance exactly 0.5 does not trigger the schedule
        let sections = select_recommendations(&params, &clean_pollution(), 40);
        assert!(sections[2].lines.is_empty());

        let lapsed = OperatingParameters {
            maintenance: 0.0,
            ..params
        };
        let sections = select_recommendations(&lapsed, &clean_pollution(), 40);
        assert_eq!(sections[2].lines, MAINTENANCE_SCHEDULE.to_vec());
    }

    #[test]
    fn test_carbon_block_triggers() {
        let params = compliant_params();

        let high_co = PollutionEstimate {
            co: 5.01,
            ..clean_pollution()
        };
        let sections = select_recommendations(&params, &high_co, 40);
        assert!(titles(&sections).contains(&CARBON_MANAGEMENT.title));

        let sections = select_recommendations(&params, &clean_pollution(), 101);
        assert!(titles(&sections).contains(&CARBON_MANAGEMENT.title));

        let borderline = PollutionEstimate {
            co: 5.0,
            ..clean_pollution()
        };
        let sections = select_recommendations(&params, &borderline, 100);
        assert!(!titles(&sections).contains(&CARBON_MANAGEMENT.title));
    }

    #[test]
    fn test_carbon_block_follows_ecological_synergy() {
        let sections = select_recommendations(&compliant_params(), &clean_pollution(), 150);
        let position = sections
            .iter()
            .position(|s| s.title == CARBON_MANAGEMENT.title)
            .unwrap();
        assert_eq!(sections[position - 1].title, ECOLOGICAL_SYNERGY.title);
        assert_eq!(sections[position + 1].title, CLOSING_BLOCKS[0].title);
    }

    #[test]
    fn test_render_lines_layout() {
        let sections = select_recommendations(&compliant_params(), &clean_pollution(), 40);
        let lines = render_lines(&sections);

        assert_eq!(lines[0], "=".repeat(60));
        assert_eq!(lines[1], "GENERATIVE ENHANCEMENT STRATEGIES");
        assert_eq!(lines[2], "=".repeat(60));
        assert_eq!(lines[3], "");
        assert_eq!(lines[4], GREEN_INFRASTRUCTURE.title);
        assert_eq!(lines.last().unwrap(), "  • Long-term (24+ months): Full transformation");

        // Operational header directly followed by the blank separator
        let op = lines.iter().position(|l| l == OPERATIONAL_TITLE).unwrap();
        assert_eq!(lines[op + 1], "");
        assert_eq!(lines[op + 2], ECOLOGICAL_SYNERGY.title);

        // banner (4) + 10 titles + 9 separators + 36 body lines
        assert_eq!(lines.len(), 4 + 10 + 9 + 36);
    }

    #[test]
    fn test_rendered_line_kinds() {
        let sections = select_recommendations(&compliant_params(), &clean_pollution(), 40);
        let lines = render_lines(&sections);

        assert_eq!(LineKind::classify(&lines[0]), LineKind::Header);
        assert_eq!(LineKind::classify(&lines[1]), LineKind::Body);
        for section in &sections {
            assert_eq!(LineKind::classify(section.title), LineKind::Subheader);
        }
    }
}

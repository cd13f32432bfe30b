/// Fraction of an element that must be visible before it reveals.
pub const REVEAL_THRESHOLD: f64 = 0.1;
/// The observation window is pulled up from the viewport bottom by this much.
pub const REVEAL_BOTTOM_MARGIN_PX: f64 = 50.0;
/// Gap between successive cards revealed by the same observation.
pub const STAGGER_STEP_MS: u64 = 100;
/// Pause between a section becoming visible and its stages starting.
pub const CONTENT_TRIGGER_DELAY_MS: u64 = 300;
/// Viewports at or under this width skip the workflow walkthrough.
pub const MOBILE_MAX_WIDTH_PX: f64 = 767.0;
/// Hero content scrolls against the page at this rate.
pub const PARALLAX_RATE: f64 = -0.5;

/// The animated layouts used by service overlays and landing sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealShape {
    Timeline,
    Process,
    Journey,
    Dashboard,
    Story,
    Comparison,
    Workflow,
    Legacy,
}

/// One element inside a staged layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageTarget {
    Intro,
    Item(usize),
    Connector(usize),
    Results,
    ResultItem(usize),
    CallToAction,
}

/// How many of each element the concrete layout contains.
#[derive(Debug, Clone, Copy, Default)]
pub struct StageCounts {
    pub items: usize,
    pub connectors: usize,
    pub result_items: usize,
    pub has_intro: bool,
    pub has_results: bool,
    pub has_cta: bool,
}

/// Reveal offsets in milliseconds for every stage of a layout. Offsets are
/// measured from the start of the animation pass; the workflow shape measures
/// from the moment its overlay opens. An empty schedule means everything
/// shows immediately, either because the layout reveals through user action
/// (comparison) or because the walkthrough is skipped on small screens
/// (workflow).
pub fn schedule(
    shape: RevealShape,
    counts: &StageCounts,
    viewport_width: f64,
) -> Vec<(StageTarget, u64)> {
    let n = counts.items as u64;
    let mut stages = Vec::new();

    match shape {
        RevealShape::Timeline => {
            for i in 0..counts.items {
                stages.push((StageTarget::Item(i), i as u64 * 900));
            }
            for c in 0..counts.connectors {
                stages.push((StageTarget::Connector(c), n * 600 + 300));
            }
            if counts.has_results {
                stages.push((StageTarget::Results, n * 600 + 600));
            }
        }
        RevealShape::Process => {
            for i in 0..counts.items {
                stages.push((StageTarget::Item(i), i as u64 * 750));
            }
            if counts.has_results {
                stages.push((StageTarget::Results, n * 500 + 300));
            }
        }
        RevealShape::Journey | RevealShape::Legacy => {
            for i in 0..counts.items {
                stages.push((StageTarget::Item(i), i as u64 * 600));
            }
            for c in 0..counts.connectors {
                stages.push((StageTarget::Connector(c), (c as u64 + 1) * 400 + 200));
            }
            if counts.has_results {
                stages.push((StageTarget::Results, n * 400 + 400));
            }
            if shape == RevealShape::Legacy {
                for r in 0..counts.result_items {
                    stages.push((StageTarget::ResultItem(r), n * 400 + 600 + r as u64 * 200));
                }
            }
        }
        RevealShape::Dashboard => {
            for i in 0..counts.items {
                stages.push((StageTarget::Item(i), i as u64 * 600));
            }
            for c in 0..counts.connectors {
                stages.push((StageTarget::Connector(c), n * 400 + 200));
            }
            if counts.has_results {
                stages.push((StageTarget::Results, n * 400 + 400));
            }
        }
        RevealShape::Story => {
            if counts.has_intro {
                stages.push((StageTarget::Intro, 200));
            }
            for i in 0..counts.items {
                stages.push((StageTarget::Item(i), 600 + i as u64 * 900));
            }
            if counts.has_cta {
                stages.push((StageTarget::CallToAction, 400 + n * 600 + 300));
            }
        }
        RevealShape::Comparison => {}
        RevealShape::Workflow => {
            if viewport_width <= MOBILE_MAX_WIDTH_PX {
                return stages;
            }
            for i in 0..counts.items {
                stages.push((StageTarget::Item(i), 600 + i as u64 * 1200));
            }
            if counts.has_results {
                stages.push((StageTarget::Results, 600 + n * 1200 + 600));
            }
            if counts.has_cta {
                stages.push((StageTarget::CallToAction, 600 + n * 1200 + 1500));
            }
        }
    }

    stages
}

/// Whether an observed intersection ratio reveals the element.
pub fn should_reveal(intersection_ratio: f64) -> bool {
    intersection_ratio >= REVEAL_THRESHOLD
}

/// Cards observed together cascade in rather than appearing at once.
pub fn stagger_delay_ms(position: usize) -> u64 {
    position as u64 * STAGGER_STEP_MS
}

/// Hero parallax offset for the current scroll position, skipped on small
/// viewports where the hero is not pinned.
pub fn hero_parallax_offset(scroll_y: f64, viewport_width: f64) -> Option<f64> {
    if viewport_width <= MOBILE_MAX_WIDTH_PX {
        None
    } else {
        Some(scroll_y * PARALLAX_RATE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn delay_of(stages: &[(StageTarget, u64)], target: StageTarget) -> u64 {
        stages
            .iter()
            .find(|(t, _)| *t == target)
            .map(|(_, d)| *d)
            .unwrap()
    }

    #[test]
    fn timeline_spaces_items_then_draws_the_line_and_results() {
        let counts = StageCounts {
            items: 3,
            connectors: 1,
            has_results: true,
            ..Default::default()
        };
        let stages = schedule(RevealShape::Timeline, &counts, 1280.0);

        assert_eq!(delay_of(&stages, StageTarget::Item(0)), 0);
        assert_eq!(delay_of(&stages, StageTarget::Item(1)), 900);
        assert_eq!(delay_of(&stages, StageTarget::Item(2)), 1800);
        assert_eq!(delay_of(&stages, StageTarget::Connector(0)), 2100);
        assert_eq!(delay_of(&stages, StageTarget::Results), 2400);
    }

    #[test]
    fn process_steps_run_tighter_than_the_timeline() {
        let counts = StageCounts {
            items: 4,
            has_results: true,
            ..Default::default()
        };
        let stages = schedule(RevealShape::Process, &counts, 1280.0);

        assert_eq!(delay_of(&stages, StageTarget::Item(3)), 2250);
        assert_eq!(delay_of(&stages, StageTarget::Results), 2300);
    }

    #[test]
    fn journey_connectors_trail_their_items() {
        let counts = StageCounts {
            items: 4,
            connectors: 3,
            has_results: true,
            ..Default::default()
        };
        let stages = schedule(RevealShape::Journey, &counts, 1280.0);

        assert_eq!(delay_of(&stages, StageTarget::Item(0)), 0);
        assert_eq!(delay_of(&stages, StageTarget::Item(3)), 1800);
        assert_eq!(delay_of(&stages, StageTarget::Connector(0)), 600);
        assert_eq!(delay_of(&stages, StageTarget::Connector(2)), 1400);
        assert_eq!(delay_of(&stages, StageTarget::Results), 2000);
    }

    #[test]
    fn dashboard_draws_every_connector_together() {
        let counts = StageCounts {
            items: 3,
            connectors: 2,
            has_results: true,
            ..Default::default()
        };
        let stages = schedule(RevealShape::Dashboard, &counts, 1280.0);

        assert_eq!(delay_of(&stages, StageTarget::Connector(0)), 1400);
        assert_eq!(delay_of(&stages, StageTarget::Connector(1)), 1400);
        assert_eq!(delay_of(&stages, StageTarget::Results), 1600);
    }

    #[test]
    fn story_opens_with_its_intro_before_the_chapters() {
        let counts = StageCounts {
            items: 2,
            has_intro: true,
            has_cta: true,
            ..Default::default()
        };
        let stages = schedule(RevealShape::Story, &counts, 1280.0);

        assert_eq!(delay_of(&stages, StageTarget::Intro), 200);
        assert_eq!(delay_of(&stages, StageTarget::Item(0)), 600);
        assert_eq!(delay_of(&stages, StageTarget::Item(1)), 1500);
        assert_eq!(delay_of(&stages, StageTarget::CallToAction), 1900);
    }

    #[test]
    fn legacy_result_items_cascade_after_the_results_panel() {
        let counts = StageCounts {
            items: 3,
            connectors: 2,
            result_items: 3,
            has_results: true,
            ..Default::default()
        };
        let stages = schedule(RevealShape::Legacy, &counts, 1280.0);

        assert_eq!(delay_of(&stages, StageTarget::Results), 1600);
        assert_eq!(delay_of(&stages, StageTarget::ResultItem(0)), 1800);
        assert_eq!(delay_of(&stages, StageTarget::ResultItem(2)), 2200);
    }

    #[test]
    fn comparison_reveals_nothing_on_a_schedule() {
        let counts = StageCounts {
            items: 2,
            ..Default::default()
        };
        assert!(schedule(RevealShape::Comparison, &counts, 1280.0).is_empty());
        assert!(schedule(RevealShape::Comparison, &counts, 400.0).is_empty());
    }

    #[test]
    fn workflow_walkthrough_runs_only_on_wide_viewports() {
        let counts = StageCounts {
            items: 4,
            has_results: true,
            has_cta: true,
            ..Default::default()
        };

        let desktop = schedule(RevealShape::Workflow, &counts, 1280.0);
        assert_eq!(delay_of(&desktop, StageTarget::Item(0)), 600);
        assert_eq!(delay_of(&desktop, StageTarget::Item(3)), 4200);
        assert_eq!(delay_of(&desktop, StageTarget::Results), 6000);
        assert_eq!(delay_of(&desktop, StageTarget::CallToAction), 6900);

        assert!(schedule(RevealShape::Workflow, &counts, 767.0).is_empty());
        assert!(!schedule(RevealShape::Workflow, &counts, 768.0).is_empty());
    }

    #[test]
    fn narrow_viewports_only_affect_the_workflow_shape() {
        let counts = StageCounts {
            items: 2,
            has_results: true,
            ..Default::default()
        };
        let narrow = schedule(RevealShape::Timeline, &counts, 375.0);
        let wide = schedule(RevealShape::Timeline, &counts, 1280.0);
        assert_eq!(narrow, wide);
    }

    #[test]
    fn reveal_threshold_and_stagger() {
        assert!(!should_reveal(0.05));
        assert!(should_reveal(0.1));
        assert!(should_reveal(0.8));
        assert_eq!(stagger_delay_ms(0), 0);
        assert_eq!(stagger_delay_ms(4), 400);
    }

    #[test]
    fn hero_parallax_tracks_scroll_on_wide_viewports_only() {
        assert_eq!(hero_parallax_offset(200.0, 1280.0), Some(-100.0));
        assert_eq!(hero_parallax_offset(200.0, 767.0), None);
    }
}

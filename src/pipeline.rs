//! Workflow selection and pipeline animation state machines.
//!
//! Both are pure state holders: all transitions are synchronous methods and the
//! rendering layers derive everything they show from the predicates here. The
//! recurring timer lives in `driver`; only its effect (`tick`) is modeled here.

/// Cyclic navigation direction through a fixed named list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

/// Move `index` one step through a list of `len` items, wrapping at both ends.
pub fn cycle(index: usize, len: usize, direction: Direction) -> usize {
    debug_assert!(len > 0);
    match direction {
        Direction::Next => (index + 1) % len,
        Direction::Previous => (index + len - 1) % len,
    }
}

/// Holds which workflow out of the fixed catalog is currently shown.
///
/// For workflow tabs, focus and selection are coupled: navigating immediately
/// changes the active workflow. Every change of the active workflow must be
/// followed by a `PipelineAnimator::reset` for the new stage count.
#[derive(Debug, Clone)]
pub struct WorkflowSelector {
    names: Vec<&'static str>,
    active: usize,
}

impl WorkflowSelector {
    pub fn new(names: Vec<&'static str>) -> Self {
        debug_assert!(!names.is_empty());
        Self { names, active: 0 }
    }

    pub fn names(&self) -> &[&'static str] {
        &self.names
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active_name(&self) -> &'static str {
        self.names[self.active]
    }

    /// Select a workflow by name. Unknown names are a programming error (the set
    /// of triggers is closed); in release builds the selection is left unchanged.
    pub fn select(&mut self, name: &str) -> bool {
        match self.names.iter().position(|n| *n == name) {
            Some(i) => {
                let changed = i != self.active;
                self.active = i;
                changed
            }
            None => {
                debug_assert!(false, "select() with unknown workflow '{name}'");
                false
            }
        }
    }

    /// Move the active workflow cyclically. Returns true (always a change for
    /// more than one workflow, and callers reset the animator regardless).
    pub fn navigate(&mut self, direction: Direction) -> bool {
        self.active = cycle(self.active, self.names.len(), direction);
        true
    }
}

/// Progress and selection state for one workflow's pipeline session.
///
/// `active_index` counts completed-or-current stages and ranges over
/// `[0, stage_count]` inclusive; 0 is the blank reset frame of the automatic
/// loop where nothing is highlighted.
#[derive(Debug, Clone)]
pub struct PipelineAnimator {
    stage_count: usize,
    active_index: usize,
    selected: Option<usize>,
    paused: bool,
    focused: usize,
}

impl PipelineAnimator {
    pub fn new(stage_count: usize) -> Self {
        Self {
            stage_count,
            active_index: 0,
            selected: None,
            paused: false,
            focused: 0,
        }
    }

    /// Back to the initial frame. Runs whenever the active workflow changes.
    pub fn reset(&mut self, stage_count: usize) {
        *self = Self::new(stage_count);
    }

    pub fn stage_count(&self) -> usize {
        self.stage_count
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn focused(&self) -> usize {
        self.focused
    }

    /// One automatic advance. Skipped entirely (not queued) while the user has
    /// interacted or the hosting terminal is not visible. Returns whether the
    /// frame changed.
    pub fn tick(&mut self, visible: bool) -> bool {
        if self.paused || !visible || self.stage_count == 0 {
            return false;
        }
        self.active_index = (self.active_index + 1) % (self.stage_count + 1);
        self.selected = self.active_index.checked_sub(1);
        true
    }

    /// Manual activation of a stage (click, or Enter/Space on the focused one).
    ///
    /// Pauses the automatic advance for the rest of this workflow session.
    /// Activating the already-selected stage keeps it selected; there is no
    /// toggle-off. The progress trail is forced to cover the activated stage.
    pub fn activate(&mut self, index: usize) {
        if index >= self.stage_count {
            debug_assert!(false, "activate() out of range: {index}");
            return;
        }
        self.paused = true;
        self.selected = Some(index);
        self.active_index = index + 1;
        self.focused = index;
    }

    /// Move keyboard focus one stage, wrapping at both ends. Focus is decoupled
    /// from selection: this never touches selection or the pause flag.
    pub fn focus(&mut self, direction: Direction) {
        if self.stage_count == 0 {
            return;
        }
        self.focused = cycle(self.focused, self.stage_count, direction);
    }

    /// Stage at `index` is completed-or-current in the progress trail.
    pub fn stage_is_active(&self, index: usize) -> bool {
        index < self.active_index
    }

    /// Stage at `index` is the one whose detail panel shows (pressed state).
    pub fn stage_is_selected(&self, index: usize) -> bool {
        self.selected == Some(index)
    }

    /// Connector between stages `index` and `index + 1` is lit once progress
    /// has reached past the earlier stage.
    pub fn connector_is_active(&self, index: usize) -> bool {
        index + 2 <= self.active_index
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::catalog;

    fn devsecops_animator() -> PipelineAnimator {
        let cat = catalog();
        assert_eq!(cat[0].name, "DevSecOps");
        PipelineAnimator::new(cat[0].stage_count())
    }

    #[test]
    fn automatic_advance_is_strict_round_robin() {
        let mut a = PipelineAnimator::new(5);
        let mut seen = vec![a.active_index()];
        for _ in 0..12 {
            assert!(a.tick(true));
            seen.push(a.active_index());
        }
        assert_eq!(seen, vec![0, 1, 2, 3, 4, 5, 0, 1, 2, 3, 4, 5, 0]);
    }

    #[test]
    fn tick_couples_selection_to_active_index() {
        let mut a = PipelineAnimator::new(3);
        a.tick(true);
        assert_eq!(a.selected(), Some(0));
        a.tick(true);
        assert_eq!(a.selected(), Some(1));
        a.tick(true);
        assert_eq!(a.selected(), Some(2));
        // Wrap back to the blank reset frame: nothing selected.
        a.tick(true);
        assert_eq!(a.active_index(), 0);
        assert_eq!(a.selected(), None);
    }

    #[test]
    fn hidden_ticks_are_skipped_not_queued() {
        let mut a = PipelineAnimator::new(4);
        a.tick(true);
        a.tick(true);
        assert_eq!(a.active_index(), 2);
        for _ in 0..10 {
            assert!(!a.tick(false));
        }
        assert_eq!(a.active_index(), 2);
        // Visibility back: resumes from where it was, no replay of missed ticks.
        a.tick(true);
        assert_eq!(a.active_index(), 3);
    }

    #[test]
    fn activation_sets_trail_selection_and_permanent_pause() {
        let mut a = PipelineAnimator::new(7);
        a.activate(2);
        assert_eq!(a.active_index(), 3);
        assert_eq!(a.selected(), Some(2));
        assert!(a.is_paused());
        // Paused for the rest of the session: ticks change nothing.
        for _ in 0..5 {
            assert!(!a.tick(true));
        }
        assert_eq!(a.active_index(), 3);
        assert_eq!(a.selected(), Some(2));
    }

    #[test]
    fn activating_selected_stage_does_not_toggle_off() {
        let mut a = PipelineAnimator::new(4);
        a.activate(1);
        a.activate(1);
        assert_eq!(a.selected(), Some(1));
        assert_eq!(a.active_index(), 2);
    }

    #[test]
    fn activation_can_move_selection_backwards() {
        let mut a = PipelineAnimator::new(6);
        a.activate(4);
        a.activate(1);
        assert_eq!(a.selected(), Some(1));
        assert_eq!(a.active_index(), 2);
    }

    #[test]
    fn reset_restores_initial_state() {
        let mut a = PipelineAnimator::new(5);
        a.tick(true);
        a.activate(3);
        a.focus(Direction::Next);
        a.reset(7);
        assert_eq!(a.active_index(), 0);
        assert_eq!(a.selected(), None);
        assert!(!a.is_paused());
        assert_eq!(a.focused(), 0);
        assert_eq!(a.stage_count(), 7);
    }

    #[test]
    fn focus_wraps_both_ends_and_leaves_selection_alone() {
        let mut a = PipelineAnimator::new(4);
        a.focus(Direction::Previous);
        assert_eq!(a.focused(), 3);
        a.focus(Direction::Next);
        assert_eq!(a.focused(), 0);
        for _ in 0..4 {
            a.focus(Direction::Next);
        }
        assert_eq!(a.focused(), 0);
        assert_eq!(a.selected(), None);
        assert!(!a.is_paused());
    }

    #[test]
    fn render_predicates_follow_the_trail() {
        let mut a = PipelineAnimator::new(4);
        a.tick(true);
        a.tick(true);
        assert!(a.stage_is_active(0));
        assert!(a.stage_is_active(1));
        assert!(!a.stage_is_active(2));
        assert!(a.stage_is_selected(1));
        assert!(!a.stage_is_selected(0));
        // Connector 0-1 lit (progress past stage 0), connector 1-2 not yet.
        assert!(a.connector_is_active(0));
        assert!(!a.connector_is_active(1));
    }

    #[test]
    fn devsecops_three_ticks_land_on_dast_scan() {
        let cat = catalog();
        let devsecops = &cat[0];
        let mut a = devsecops_animator();
        for _ in 0..3 {
            a.tick(true);
        }
        assert_eq!(a.active_index(), 3);
        let stage = devsecops.stages[a.selected().unwrap()];
        assert_eq!(stage, "DAST Scan");
        let d = devsecops.detail(stage).unwrap();
        assert_eq!(d.tools, vec!["OWASP ZAP"]);
        assert!(!d.description.is_empty());
    }

    #[test]
    fn devsecops_iac_security_activation_scenario() {
        let cat = catalog();
        let devsecops = &cat[0];
        let pos = devsecops
            .stages
            .iter()
            .position(|s| *s == "IaC Security")
            .unwrap();
        assert_eq!(pos, 4);
        let mut a = devsecops_animator();
        a.activate(pos);
        assert_eq!(a.active_index(), 5);
        assert_eq!(devsecops.stages[a.selected().unwrap()], "IaC Security");
        assert!(a.is_paused());
        a.tick(true);
        a.tick(true);
        assert_eq!(a.active_index(), 5);
        assert_eq!(a.selected(), Some(4));
    }

    #[test]
    fn selector_navigates_cyclically_and_selects_by_name() {
        let names = catalog().iter().map(|w| w.name).collect();
        let mut s = WorkflowSelector::new(names);
        assert_eq!(s.active_name(), "DevSecOps");
        s.navigate(Direction::Previous);
        assert_eq!(s.active_name(), "SIEM & Alerting");
        s.navigate(Direction::Next);
        assert_eq!(s.active_name(), "DevSecOps");
        assert!(s.select("Incident Response"));
        assert_eq!(s.active_index(), 1);
        // Re-selecting the active workflow is not a change.
        assert!(!s.select("Incident Response"));
    }
}

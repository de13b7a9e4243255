use crate::model::{Dossier, Theme, Workflow, DOSSIER_TABS};
use crate::pipeline::{cycle, Direction, PipelineAnimator, WorkflowSelector};

/// Which group of the Pipelines view owns Left/Right input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusZone {
    WorkflowTabs,
    Stages,
}

/// All state owned by the UI thread. Rendering is a pure function of this
/// struct; nothing else mutates it.
pub struct UiState {
    pub tab: usize,
    pub theme: Theme,
    pub dossier_tab: usize,
    pub focus: FocusZone,
    pub visible: bool,
    pub info: String,

    pub dossier: Dossier,
    pub catalog: Vec<Workflow>,
    pub selector: WorkflowSelector,
    pub animator: PipelineAnimator,
}

impl UiState {
    pub fn new(theme: Theme, catalog: Vec<Workflow>, dossier: Dossier) -> Self {
        let selector = WorkflowSelector::new(catalog.iter().map(|w| w.name).collect());
        let animator = PipelineAnimator::new(catalog[selector.active_index()].stage_count());
        Self {
            tab: 0,
            theme,
            dossier_tab: 0,
            focus: FocusZone::WorkflowTabs,
            visible: true,
            info: String::new(),
            dossier,
            catalog,
            selector,
            animator,
        }
    }

    pub fn active_workflow(&self) -> &Workflow {
        &self.catalog[self.selector.active_index()]
    }

    /// Name of the stage whose detail panel should show, if any.
    pub fn selected_stage(&self) -> Option<&'static str> {
        self.animator
            .selected()
            .and_then(|i| self.active_workflow().stages.get(i).copied())
    }

    /// Apply one automatic-advance tick; a no-op while hidden or paused.
    pub fn apply_tick(&mut self) {
        let visible = self.visible;
        self.animator.tick(visible);
    }

    /// Move the active workflow cyclically and reset the pipeline session.
    /// Returns true so callers know to restart the timer cadence.
    pub fn navigate_workflow(&mut self, direction: Direction) -> bool {
        self.selector.navigate(direction);
        self.reset_pipeline();
        true
    }

    /// Select a workflow by name if it exists; used for the CLI `--workflow`
    /// override where the name is user input rather than a closed UI trigger.
    pub fn select_workflow_checked(&mut self, name: &str) -> bool {
        if !self.selector.names().iter().any(|n| *n == name) {
            return false;
        }
        self.selector.select(name);
        self.reset_pipeline();
        true
    }

    fn reset_pipeline(&mut self) {
        let stage_count = self.active_workflow().stage_count();
        self.animator.reset(stage_count);
    }

    /// Dossier tabs couple focus and selection: navigation changes the shown
    /// tab immediately.
    pub fn navigate_dossier(&mut self, direction: Direction) {
        self.dossier_tab = cycle(self.dossier_tab, DOSSIER_TABS.len(), direction);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content;

    fn state() -> UiState {
        UiState::new(Theme::Dark, content::catalog(), content::dossier())
    }

    #[test]
    fn workflow_change_resets_the_whole_session() {
        let mut s = state();
        s.apply_tick();
        s.animator.activate(2);
        s.animator.focus(Direction::Next);
        s.navigate_workflow(Direction::Next);
        assert_eq!(s.selector.active_name(), "Incident Response");
        assert_eq!(s.animator.active_index(), 0);
        assert_eq!(s.animator.selected(), None);
        assert!(!s.animator.is_paused());
        assert_eq!(s.animator.focused(), 0);
        assert_eq!(s.animator.stage_count(), 5);
    }

    #[test]
    fn ticks_are_dropped_while_hidden() {
        let mut s = state();
        s.apply_tick();
        s.visible = false;
        s.apply_tick();
        s.apply_tick();
        assert_eq!(s.animator.active_index(), 1);
        s.visible = true;
        s.apply_tick();
        assert_eq!(s.animator.active_index(), 2);
    }

    #[test]
    fn selected_stage_resolves_through_the_active_workflow() {
        let mut s = state();
        assert_eq!(s.selected_stage(), None);
        s.apply_tick();
        assert_eq!(s.selected_stage(), Some("Code & Commit"));
        s.animator.activate(4);
        assert_eq!(s.selected_stage(), Some("IaC Security"));
    }

    #[test]
    fn dossier_tabs_wrap_in_both_directions() {
        let mut s = state();
        s.navigate_dossier(Direction::Previous);
        assert_eq!(s.dossier_tab, DOSSIER_TABS.len() - 1);
        s.navigate_dossier(Direction::Next);
        assert_eq!(s.dossier_tab, 0);
    }

    #[test]
    fn checked_select_rejects_unknown_names() {
        let mut s = state();
        assert!(!s.select_workflow_checked("No Such Workflow"));
        assert_eq!(s.selector.active_name(), "DevSecOps");
        assert!(s.select_workflow_checked("SIEM & Alerting"));
        assert_eq!(s.animator.stage_count(), 5);
    }
}

use super::traits::View;

/// Main tabs in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Tournaments,
    Scrims,
    Winners,
    Leaderboard,
}

impl Tab {
    pub fn label(&self) -> &'static str {
        match self {
            Tab::Tournaments => "Tournaments",
            Tab::Scrims => "Scrims",
            Tab::Winners => "Winners",
            Tab::Leaderboard => "Leaderboard",
        }
    }

    pub fn number(&self) -> usize {
        match self {
            Tab::Tournaments => 1,
            Tab::Scrims => 2,
            Tab::Winners => 3,
            Tab::Leaderboard => 4,
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Tab::Tournaments => Tab::Scrims,
            Tab::Scrims => Tab::Winners,
            Tab::Winners => Tab::Leaderboard,
            Tab::Leaderboard => Tab::Tournaments,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Tab::Tournaments => Tab::Leaderboard,
            Tab::Scrims => Tab::Tournaments,
            Tab::Winners => Tab::Scrims,
            Tab::Leaderboard => Tab::Winners,
        }
    }
}

/// Application state managing navigation
pub struct AppState {
    pub current_tab: Tab,
    pub view_stack: Vec<Box<dyn View>>,
    pub breadcrumb: Vec<String>,
}

impl AppState {
    pub fn new(initial_tab: Tab, root_view: Box<dyn View>) -> Self {
        let breadcrumb = vec![initial_tab.label().to_string(), root_view.breadcrumb_label()];
        AppState {
            current_tab: initial_tab,
            view_stack: vec![root_view],
            breadcrumb,
        }
    }

    /// Get the current active view (top of stack)
    pub fn current_view(&mut self) -> &mut Box<dyn View> {
        self.view_stack
            .last_mut()
            .expect("View stack should never be empty")
    }

    /// Push a new view onto the stack
    pub fn push_view(&mut self, view: Box<dyn View>) {
        self.breadcrumb.push(view.breadcrumb_label());
        self.view_stack.push(view);
    }

    /// Pop the current view from the stack
    /// Returns false if we're already at the root view
    pub fn pop_view(&mut self) -> bool {
        if self.view_stack.len() > 1 {
            self.view_stack.pop();
            self.breadcrumb.pop();
            true
        } else {
            false
        }
    }

    /// Check if we're at the root level of the current tab
    pub fn at_root(&self) -> bool {
        self.view_stack.len() == 1
    }

    /// Replace the entire view stack with a new root view
    /// Used when switching tabs
    pub fn replace_root(&mut self, view: Box<dyn View>) {
        self.view_stack.clear();
        self.breadcrumb.clear();
        self.breadcrumb.push(self.current_tab.label().to_string());
        self.breadcrumb.push(view.breadcrumb_label());
        self.view_stack.push(view);
    }
}

use crate::app::actions::Action;
use crate::app::state::AppState;

pub fn handle(state: &mut AppState, action: &Action) -> bool {
    match action {
        Action::SetSearchQuery(q) => {
            state.search.query = q.clone();
            true
        }
        Action::ClearSearch => {
            state.search.query.clear();
            true
        }
        _ => false,
    }
}

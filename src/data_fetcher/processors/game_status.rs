/// Coarse state of one game, used to pick how long a date stays cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// In progress or under review
    Live,
    /// Warmup or pre-game, the start is moments away
    Imminent,
    /// Scheduled or delayed, not started yet
    Upcoming,
    /// Final, postponed, cancelled or otherwise settled
    Concluded,
    /// A status this classifier does not know yet
    Unrecognized,
}

impl GameState {
    pub fn is_active(self) -> bool {
        self == GameState::Live
    }

    /// Anything not live and not settled, including unrecognized statuses.
    pub fn is_still_to_play(self) -> bool {
        matches!(
            self,
            GameState::Imminent | GameState::Upcoming | GameState::Unrecognized
        )
    }

    pub fn is_soon(self) -> bool {
        self == GameState::Imminent
    }
}

/// Classifies a game from the feed's abstract and detailed states.
///
/// The detailed state wins when it is recognized. Reasons appended after a
/// colon ("Postponed: Rain") are ignored. When neither state is recognized the
/// game is [`GameState::Unrecognized`], which still counts as to be played.
///
/// # Examples
///
/// ```
/// use baseball_schedule::data_fetcher::processors::{classify_status, GameState};
///
/// assert_eq!(classify_status(Some("Live"), Some("In Progress")), GameState::Live);
/// assert_eq!(classify_status(Some("Final"), Some("Postponed: Rain")), GameState::Concluded);
/// assert_eq!(classify_status(Some("Preview"), Some("Warmup")), GameState::Imminent);
/// assert_eq!(classify_status(None, Some("Tarp on field")), GameState::Unrecognized);
/// ```
pub fn classify_status(abstract_state: Option<&str>, detailed_state: Option<&str>) -> GameState {
    detailed_state
        .and_then(classify_detailed)
        .or_else(|| abstract_state.and_then(classify_abstract))
        .unwrap_or(GameState::Unrecognized)
}

fn classify_detailed(detailed: &str) -> Option<GameState> {
    let base = detailed.split(':').next().unwrap_or(detailed).trim();

    let state = match base {
        "In Progress" | "Manager challenge" | "Umpire review" => GameState::Live,
        s if s.starts_with("Review") => GameState::Live,
        "Warmup" | "Pre-Game" | "Pre-game" => GameState::Imminent,
        "Scheduled" | "Preview" => GameState::Upcoming,
        s if s.starts_with("Delayed") => GameState::Upcoming,
        "Final" | "Game Over" | "Postponed" | "Cancelled" | "Suspended" | "Completed Early" => {
            GameState::Concluded
        }
        _ => return None,
    };
    Some(state)
}

fn classify_abstract(abstract_state: &str) -> Option<GameState> {
    match abstract_state.trim() {
        "Live" => Some(GameState::Live),
        "Preview" => Some(GameState::Upcoming),
        "Final" => Some(GameState::Concluded),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_live_states() {
        assert_eq!(classify_status(Some("Live"), Some("In Progress")), GameState::Live);
        assert_eq!(
            classify_status(Some("Live"), Some("Manager challenge")),
            GameState::Live
        );
        assert_eq!(
            classify_status(Some("Live"), Some("Review: Home Run")),
            GameState::Live
        );
        // Unknown detail, but the abstract state is live
        assert_eq!(
            classify_status(Some("Live"), Some("Injury Delay Pending")),
            GameState::Live
        );
    }

    #[test]
    fn test_imminent_states() {
        for detailed in ["Warmup", "Pre-Game", "Pre-game"] {
            let state = classify_status(Some("Preview"), Some(detailed));
            assert_eq!(state, GameState::Imminent, "{detailed}");
            assert!(state.is_soon());
            assert!(state.is_still_to_play());
        }
    }

    #[test]
    fn test_upcoming_states() {
        assert_eq!(
            classify_status(Some("Preview"), Some("Scheduled")),
            GameState::Upcoming
        );
        assert_eq!(
            classify_status(Some("Preview"), Some("Delayed Start: Rain")),
            GameState::Upcoming
        );
        assert_eq!(
            classify_status(Some("Live"), Some("Delayed: Rain")),
            GameState::Upcoming
        );
        assert_eq!(classify_status(Some("Preview"), None), GameState::Upcoming);
    }

    #[test]
    fn test_concluded_states() {
        for detailed in [
            "Final",
            "Game Over",
            "Postponed: Rain",
            "Cancelled",
            "Suspended: Inclement Weather",
            "Completed Early: Rain",
        ] {
            let state = classify_status(Some("Final"), Some(detailed));
            assert_eq!(state, GameState::Concluded, "{detailed}");
            assert!(!state.is_still_to_play());
            assert!(!state.is_active());
        }
        assert_eq!(classify_status(Some("Final"), None), GameState::Concluded);
    }

    #[test]
    fn test_unrecognized_counts_as_still_to_play() {
        let state = classify_status(Some("Other"), Some("Tarp on field"));
        assert_eq!(state, GameState::Unrecognized);
        assert!(state.is_still_to_play());
        assert!(!state.is_soon());
        assert!(!state.is_active());

        assert_eq!(classify_status(None, None), GameState::Unrecognized);
    }
}

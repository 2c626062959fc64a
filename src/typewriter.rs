use std::time::Duration;

const TYPE_MS: u64 = 100;
const DELETE_MS: u64 = 50;
const HOLD_MS: u64 = 2000;

/// Where the animation is in its cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Appending one character per tick.
    Typing,
    /// Dwelling on the fully typed role before deletion starts.
    PausedFull,
    /// Removing one character per tick, faster than typing.
    Deleting,
    /// Between roles: the text is empty and the index already points at
    /// the next role.
    PausedEmpty,
}

/// Headline animation that types each role out, holds it, deletes it and
/// moves on to the next, cycling forever. The machine itself is
/// timer-agnostic: the owner calls [`advance`](Typewriter::advance) once
/// per tick and re-arms a single-shot timer with
/// [`delay`](Typewriter::delay).
#[derive(Debug, Clone)]
pub struct Typewriter {
    roles: Vec<String>,
    index: usize,
    text: String,
    phase: Phase,
}

impl Typewriter {
    /// Fresh machine: first role, empty text, typing.
    pub fn new(roles: &[&str]) -> Self {
        Typewriter {
            roles: roles.iter().map(|r| r.to_string()).collect(),
            index: 0,
            text: String::new(),
            phase: Phase::Typing,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Delay until the next tick for the current phase.
    pub fn delay(&self) -> Duration {
        let ms = match self.phase {
            Phase::Typing | Phase::PausedEmpty => TYPE_MS,
            Phase::PausedFull => HOLD_MS,
            Phase::Deleting => DELETE_MS,
        };
        Duration::from_millis(ms)
    }

    /// Run one timer tick. With no roles configured this is a no-op and
    /// the machine stays blank forever.
    pub fn advance(&mut self) {
        if self.roles.is_empty() {
            return;
        }
        match self.phase {
            Phase::Typing => self.type_next_char(),
            Phase::PausedFull => {
                self.phase = Phase::Deleting;
            }
            Phase::Deleting => {
                self.text.pop();
                if self.text.is_empty() {
                    self.index = (self.index + 1) % self.roles.len();
                    self.phase = Phase::PausedEmpty;
                }
            }
            Phase::PausedEmpty => self.type_next_char(),
        }
    }

    // Invariant: `text` is a prefix of the current role, so its length is
    // a char boundary there.
    fn type_next_char(&mut self) {
        let role = &self.roles[self.index];
        if let Some(c) = role
            .get(self.text.len()..)
            .and_then(|rest| rest.chars().next())
        {
            self.text.push(c);
        }
        self.phase = if self.text.len() >= role.len() {
            Phase::PausedFull
        } else {
            Phase::Typing
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROLES: [&str; 2] = ["Web Developer", "AI Enthusiast"];

    fn machine() -> Typewriter {
        Typewriter::new(&ROLES)
    }

    // Tick until the predicate holds, panicking if it never does
    fn tick_until(tw: &mut Typewriter, limit: usize, pred: impl Fn(&Typewriter) -> bool) {
        for _ in 0..limit {
            if pred(tw) {
                return;
            }
            tw.advance();
        }
        panic!("state not reached within {} ticks", limit);
    }

    #[test]
    fn test_starts_typing_first_role_from_empty() {
        let mut tw = machine();
        assert_eq!(tw.phase(), Phase::Typing);
        assert_eq!(tw.text(), "");
        assert_eq!(tw.index(), 0);
        tw.advance();
        assert_eq!(tw.text(), "W");
        tw.advance();
        assert_eq!(tw.text(), "We");
    }

    #[test]
    fn test_full_text_holds_then_deletes() {
        let mut tw = machine();
        tick_until(&mut tw, 100, |t| t.phase() == Phase::PausedFull);
        assert_eq!(tw.text(), "Web Developer");
        tw.advance();
        assert_eq!(tw.phase(), Phase::Deleting);
        assert_eq!(tw.text(), "Web Developer");
        tw.advance();
        assert_eq!(tw.text(), "Web Develope");
    }

    #[test]
    fn test_emptied_text_moves_to_next_role() {
        let mut tw = machine();
        tick_until(&mut tw, 100, |t| t.phase() == Phase::PausedEmpty);
        assert_eq!(tw.text(), "");
        assert_eq!(tw.index(), 1);
        tw.advance();
        assert_eq!(tw.phase(), Phase::Typing);
        assert_eq!(tw.text(), "A");
    }

    #[test]
    fn test_wraps_back_to_first_role() {
        let mut tw = machine();
        tick_until(&mut tw, 200, |t| {
            t.phase() == Phase::PausedEmpty && t.index() == 0
        });
        tw.advance();
        assert_eq!(tw.text(), "W");
    }

    #[test]
    fn test_text_is_always_a_prefix_of_the_current_role() {
        let mut tw = machine();
        for _ in 0..500 {
            tw.advance();
            assert!(ROLES[tw.index()].starts_with(tw.text()));
        }
    }

    #[test]
    fn test_text_never_outgrows_the_longest_role() {
        let mut tw = machine();
        let longest = ROLES.iter().map(|r| r.len()).max().unwrap();
        for _ in 0..500 {
            tw.advance();
            assert!(tw.text().len() <= longest);
        }
    }

    #[test]
    fn test_delay_follows_phase() {
        let mut tw = machine();
        assert_eq!(tw.delay(), Duration::from_millis(100));
        tick_until(&mut tw, 100, |t| t.phase() == Phase::PausedFull);
        assert_eq!(tw.delay(), Duration::from_millis(2000));
        tw.advance();
        assert_eq!(tw.delay(), Duration::from_millis(50));
        tick_until(&mut tw, 100, |t| t.phase() == Phase::PausedEmpty);
        assert_eq!(tw.delay(), Duration::from_millis(100));
    }

    #[test]
    fn test_single_character_role_completes_immediately() {
        let mut tw = Typewriter::new(&["X"]);
        tw.advance();
        assert_eq!(tw.text(), "X");
        assert_eq!(tw.phase(), Phase::PausedFull);
        tw.advance();
        tw.advance();
        assert_eq!(tw.text(), "");
        assert_eq!(tw.phase(), Phase::PausedEmpty);
        assert_eq!(tw.index(), 0);
        tw.advance();
        assert_eq!(tw.text(), "X");
        assert_eq!(tw.phase(), Phase::PausedFull);
    }

    #[test]
    fn test_empty_roles_list_is_inert() {
        let mut tw = Typewriter::new(&[]);
        for _ in 0..10 {
            tw.advance();
        }
        assert_eq!(tw.text(), "");
        assert_eq!(tw.phase(), Phase::Typing);
    }

    #[test]
    fn test_fresh_machine_restarts_from_scratch() {
        let mut tw = machine();
        tick_until(&mut tw, 100, |t| t.index() == 1);
        let fresh = Typewriter::new(&ROLES);
        assert_eq!(fresh.index(), 0);
        assert_eq!(fresh.text(), "");
        assert_eq!(fresh.phase(), Phase::Typing);
    }
}

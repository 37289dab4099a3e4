//! Round lifecycle and the interactive prompt loop.
//!
//! A round commits to the computer's move and prints the digest before the
//! first prompt; the key is printed only after the user's move is locked in.

use crate::crypto::{Commitment, HmacKey};
use crate::error::{CryptoError, GameError, InputError};
use crate::games::{resolve, MoveIndex, MoveList, MoveSelector, RelationTable};
use crate::protocol::{CommitAnnouncement, RoundId, RoundReveal};
use rand::rngs::ThreadRng;
use rand::RngCore;
use std::io::{BufRead, Write};
use std::num::IntErrorKind;
use tracing::{debug, info, info_span, warn};

/// One line of interactive input
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Quit,
    Help,
    Play(MoveIndex),
}

impl Command {
    /// Parse a prompt answer: "0", "?", or a 1-based move number
    pub fn parse(input: &str, moves: &MoveList) -> Result<Self, InputError> {
        let text = input.trim();
        if text == "?" {
            return Ok(Command::Help);
        }

        let number: i64 = match text.parse::<i64>() {
            Ok(number) => number,
            // Well-formed but too large for i64: still just a number out of range
            Err(err) => match err.kind() {
                IntErrorKind::PosOverflow => i64::MAX,
                IntErrorKind::NegOverflow => i64::MIN,
                _ => return Err(InputError::NotANumber(text.to_string())),
            },
        };

        match number {
            0 => Ok(Command::Quit),
            n if n < 0 => Err(InputError::OutOfRange {
                got: n,
                max: moves.len(),
            }),
            n => usize::try_from(n - 1)
                .ok()
                .and_then(|position| moves.index(position))
                .map(Command::Play)
                .ok_or(InputError::OutOfRange {
                    got: n,
                    max: moves.len(),
                }),
        }
    }
}

/// The computer's committed move for a single round
pub struct Round {
    id: RoundId,
    computer_move: MoveIndex,
    key: HmacKey,
    commitment: Commitment,
}

impl Round {
    /// Pick the computer's move and commit to it under a fresh key
    pub fn start<R: RngCore>(
        moves: &MoveList,
        selector: &mut MoveSelector<R>,
    ) -> Result<Self, CryptoError> {
        let computer_move = selector.pick(moves);
        let key = HmacKey::generate()?;
        let commitment = Commitment::new(&key, moves.name(computer_move));

        Ok(Self {
            id: RoundId::new(),
            computer_move,
            key,
            commitment,
        })
    }

    pub fn id(&self) -> RoundId {
        self.id
    }

    /// What the user may see before choosing
    pub fn announcement(&self) -> CommitAnnouncement {
        CommitAnnouncement {
            round_id: self.id,
            commitment: self.commitment,
        }
    }

    /// Resolve against the user's move and give up the key
    pub fn reveal(self, moves: &MoveList, user_move: MoveIndex) -> RoundReveal {
        let outcome = resolve(user_move, self.computer_move, moves.len());
        let computer_move = moves.name(self.computer_move);

        RoundReveal {
            round_id: self.id,
            user_move: moves.name(user_move).to_string(),
            computer_move: computer_move.to_string(),
            outcome,
            announced: self.commitment,
            // Recomputed over the revealed move so the printed value is checkable
            commitment: Commitment::new(&self.key, computer_move),
            key: self.key,
        }
    }
}

/// A game session over one validated move list
pub struct Session<R = ThreadRng> {
    moves: MoveList,
    selector: MoveSelector<R>,
    round_limit: Option<usize>,
    json_reveals: bool,
}

impl Session<ThreadRng> {
    pub fn new(moves: MoveList) -> Self {
        Self::with_selector(moves, MoveSelector::new())
    }
}

impl<R: RngCore> Session<R> {
    pub fn with_selector(moves: MoveList, selector: MoveSelector<R>) -> Self {
        Self {
            moves,
            selector,
            round_limit: None,
            json_reveals: false,
        }
    }

    /// Stop after this many resolved rounds
    pub fn with_round_limit(mut self, limit: Option<usize>) -> Self {
        self.round_limit = limit;
        self
    }

    /// Also print each reveal as one JSON line
    pub fn with_json_reveals(mut self, enabled: bool) -> Self {
        self.json_reveals = enabled;
        self
    }

    /// Run rounds until "0", end of input, or the round limit.
    ///
    /// Returns the number of resolved rounds.
    pub fn run<I: BufRead, O: Write>(
        &mut self,
        mut input: I,
        mut output: O,
    ) -> Result<usize, GameError> {
        let mut resolved = 0;

        while self.round_limit.map_or(true, |limit| resolved < limit) {
            let round = Round::start(&self.moves, &mut self.selector)?;
            let span = info_span!("round", round_id = %round.id());
            let _guard = span.enter();

            let announcement = round.announcement();
            info!(commitment = %announcement.commitment, "committed to computer move");
            writeln!(output, "HMAC: {}", announcement.commitment)?;
            self.write_menu(&mut output)?;

            let user_move = loop {
                write!(output, "Enter your move: ")?;
                output.flush()?;

                let mut line = String::new();
                if input.read_line(&mut line)? == 0 {
                    info!("end of input");
                    return Ok(resolved);
                }

                match Command::parse(&line, &self.moves) {
                    Ok(Command::Quit) => {
                        info!("user quit");
                        return Ok(resolved);
                    }
                    Ok(Command::Help) => {
                        debug!("rendering help table");
                        writeln!(output)?;
                        writeln!(output, "Move vs. PC\\User:")?;
                        write!(output, "{}", RelationTable::build(&self.moves))?;
                    }
                    Ok(Command::Play(index)) => break index,
                    Err(err) => {
                        warn!(input = %line.trim(), %err, "rejected input");
                        writeln!(output, "{err}")?;
                    }
                }
            };

            let reveal = round.reveal(&self.moves, user_move);
            debug!(key = %reveal.key, outcome = ?reveal.outcome, "round revealed");
            self.write_reveal(&mut output, &reveal)?;
            resolved += 1;
        }

        Ok(resolved)
    }

    fn write_menu<O: Write>(&self, output: &mut O) -> Result<(), GameError> {
        writeln!(output, "Available moves:")?;
        for (index, name) in self.moves.iter() {
            writeln!(output, "{} - {}", index.display_number(), name)?;
        }
        writeln!(output, "0 - exit")?;
        writeln!(output, "? - help")?;
        Ok(())
    }

    fn write_reveal<O: Write>(
        &self,
        output: &mut O,
        reveal: &RoundReveal,
    ) -> Result<(), GameError> {
        writeln!(output, "------")?;
        writeln!(output, "HMAC key: {}", reveal.key)?;
        writeln!(output, "Your move: {}", reveal.user_move)?;
        writeln!(output, "Computer move: {}", reveal.computer_move)?;
        writeln!(output, "{}", reveal.outcome)?;
        writeln!(output, "HMAC: {}", reveal.commitment)?;
        writeln!(output, "------")?;
        if self.json_reveals {
            writeln!(output, "{}", serde_json::to_string(reveal)?)?;
        }
        Ok(())
    }
}

//! Outcome resolution over the circular beats-relation.

use super::MoveIndex;
use crate::protocol::Outcome;

/// Decide a round from the user's and the computer's move.
///
/// Each move beats the `move_count / 2` moves after it (wrapping) and loses
/// to the rest. `move_count` must be odd and both indices below it.
pub fn resolve(user: MoveIndex, computer: MoveIndex, move_count: usize) -> Outcome {
    let (user, computer) = (user.get(), computer.get());
    let half = move_count / 2;

    if user == computer {
        Outcome::Draw
    } else if (user < computer && computer - user <= half)
        || (user > computer && user - computer > half)
    {
        Outcome::UserWins
    } else {
        Outcome::ComputerWins
    }
}

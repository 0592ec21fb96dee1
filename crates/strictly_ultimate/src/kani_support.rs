//! Kani arbitrary implementations for ultimate tic-tac-toe types.
//!
//! These implementations allow Kani to explore all possible values of our types
//! during model checking.

#[cfg(kani)]
use super::{Mark, Player, Position, SubBoard, SubBoardStatus};

#[cfg(kani)]
impl kani::Arbitrary for Player {
    fn any() -> Self {
        if kani::any() { Player::X } else { Player::O }
    }
}

#[cfg(kani)]
impl kani::Arbitrary for Position {
    fn any() -> Self {
        let index: u8 = kani::any();
        kani::assume(index < 9);
        Position::ALL[index as usize]
    }
}

#[cfg(kani)]
impl kani::Arbitrary for Mark {
    fn any() -> Self {
        let tag: u8 = kani::any();
        kani::assume(tag < 3);
        match tag {
            0 => Mark::Empty,
            1 => Mark::X,
            _ => Mark::O,
        }
    }
}

#[cfg(kani)]
impl kani::Arbitrary for SubBoardStatus {
    fn any() -> Self {
        let tag: u8 = kani::any();
        kani::assume(tag < 3);
        match tag {
            0 => SubBoardStatus::Open,
            1 => SubBoardStatus::Won(kani::any()),
            _ => SubBoardStatus::Drawn,
        }
    }
}

#[cfg(kani)]
impl kani::Arbitrary for SubBoard {
    fn any() -> Self {
        let marks: [Mark; 9] = kani::any();
        SubBoard::from_marks(marks)
    }
}

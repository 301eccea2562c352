//! Console driver: runs any [`StrategyGame`] over a line-based reader and a
//! writer, with each seat taken by a human at the console or a computer
//! move source.

use std::io::{BufRead, Write};

use tracing::{info, warn};

use crate::ai::Agent;
use crate::error::InputError;
use crate::game::{ConnectFour, StrategyGame};

/// Produces moves for a game without going through the console input.
pub trait MoveSource<G: StrategyGame> {
    fn next_move(&mut self, game: &G) -> Result<G::Move, InputError>;

    fn name(&self) -> &str;
}

/// Adapts an [`Agent`] into a move source for Connect Four.
pub struct AgentSource<A> {
    agent: A,
}

impl<A: Agent> AgentSource<A> {
    pub fn new(agent: A) -> Self {
        AgentSource { agent }
    }
}

impl<A: Agent> MoveSource<ConnectFour> for AgentSource<A> {
    fn next_move(&mut self, game: &ConnectFour) -> Result<i32, InputError> {
        let column = self
            .agent
            .select_column(game)
            .ok_or(InputError::NoLegalMove)?;
        Ok(column as i32)
    }

    fn name(&self) -> &str {
        self.agent.name()
    }
}

/// Who plays a seat.
pub enum Seat<'a, G: StrategyGame> {
    /// Moves are typed on the console input, one per line.
    Human,
    Computer(Box<dyn MoveSource<G> + 'a>),
}

pub struct Console<R, W> {
    input: R,
    output: W,
    prompt: String,
    show_instructions: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Console {
            input,
            output,
            prompt: "Column? ".to_string(),
            show_instructions: true,
        }
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    pub fn with_instructions(mut self, show: bool) -> Self {
        self.show_instructions = show;
        self
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Play `game` to the end and return its winner code.
    ///
    /// Unreadable input and refused moves are reported and the same player
    /// is asked again. Fails if the console input closes first, or if a
    /// computer seat proposes a move the game refuses.
    pub fn play<G: StrategyGame>(
        &mut self,
        game: &mut G,
        seats: &mut [Seat<'_, G>; 2],
    ) -> Result<i32, InputError> {
        if self.show_instructions {
            write!(self.output, "{}", game.instructions())?;
        }

        while !game.is_game_over() {
            writeln!(self.output)?;
            write!(self.output, "{}", game.render())?;

            let player = game.next_player();
            let seat = &mut seats[if player == 1 { 0 } else { 1 }];
            loop {
                let mv = match self.request_move(&*game, player, seat) {
                    Ok(mv) => mv,
                    Err(InputError::Parse(text)) => {
                        warn!(player, input = %text, "unreadable move");
                        writeln!(self.output, "'{text}' is not a column, try again")?;
                        continue;
                    }
                    Err(err) => return Err(err),
                };

                match game.make_move(mv) {
                    Ok(()) => break,
                    Err(err) => {
                        warn!(player, %mv, %err, "move rejected");
                        if let Seat::Computer(source) = &*seat {
                            return Err(InputError::Rejected {
                                name: source.name().to_string(),
                                reason: err.to_string(),
                            });
                        }
                        writeln!(self.output, "{err}, try again")?;
                    }
                }
            }
        }

        writeln!(self.output)?;
        write!(self.output, "{}", game.render())?;
        let winner = game.winner();
        match winner {
            0 => writeln!(self.output, "The game is a tie.")?,
            w => writeln!(self.output, "Player {w} wins!")?,
        }
        self.output.flush()?;
        info!(winner, "game over");
        Ok(winner)
    }

    fn request_move<G: StrategyGame>(
        &mut self,
        game: &G,
        player: i32,
        seat: &mut Seat<'_, G>,
    ) -> Result<G::Move, InputError> {
        match seat {
            Seat::Human => {
                write!(self.output, "Player {player}, {}", self.prompt)?;
                self.output.flush()?;

                let mut line = String::new();
                if self.input.read_line(&mut line)? == 0 {
                    return Err(InputError::Closed);
                }
                let text = line.trim();
                text.parse().map_err(|_| InputError::Parse(text.to_string()))
            }
            Seat::Computer(source) => {
                let mv = source.next_move(game)?;
                writeln!(self.output, "Player {player} ({}) plays {mv}", source.name())?;
                Ok(mv)
            }
        }
    }
}

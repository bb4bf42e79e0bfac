//! Human seat reading positions from a line-oriented input.

use super::Seat;
use anyhow::Result;
use noughts_board::{Grid, Position};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader, Stdin, Stdout};
use tracing::{debug, warn};

/// Human player typing positions.
///
/// Accepts `1`-`9` as shown on the rendered board, or a label such as
/// `center` or `top-left`.
pub struct HumanSeat<R = BufReader<Stdin>, W = Stdout> {
    name: String,
    input: R,
    output: W,
}

impl HumanSeat {
    /// Creates a human seat on the process's stdin and stdout.
    pub fn stdio(name: impl Into<String>) -> Self {
        Self::new(name, BufReader::new(tokio::io::stdin()), tokio::io::stdout())
    }
}

impl<R, W> HumanSeat<R, W> {
    /// Creates a human seat on arbitrary input and output streams.
    pub fn new(name: impl Into<String>, input: R, output: W) -> Self {
        Self {
            name: name.into(),
            input,
            output,
        }
    }
}

/// Parses one line of input into a board index.
///
/// Digits are the 1-based numbers printed on the board; labels are matched
/// case-insensitively.
pub fn parse_choice(line: &str) -> Option<usize> {
    let line = line.trim();
    if let Ok(number) = line.parse::<usize>() {
        return (1..=9).contains(&number).then(|| number - 1);
    }
    Position::from_label_or_number(line).map(Position::to_index)
}

#[async_trait::async_trait]
impl<R, W> Seat for HumanSeat<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    async fn choose_position(&mut self, grid: &Grid, _is_opening_move: bool) -> Result<usize> {
        // Let a renderer on the same runtime drain pending events before the prompt.
        tokio::task::yield_now().await;

        loop {
            let prompt = format!("{}, choose a cell (1-9): ", self.name);
            self.output.write_all(prompt.as_bytes()).await?;
            self.output.flush().await?;

            let mut line = String::new();
            if self.input.read_line(&mut line).await? == 0 {
                anyhow::bail!("Input closed");
            }

            match parse_choice(&line) {
                Some(position) if grid.cell_at(position).is_some_and(|c| c.is_empty()) => {
                    debug!(seat = %self.name, position, "Human chose position");
                    return Ok(position);
                }
                Some(position) => {
                    debug!(seat = %self.name, position, "Cell already taken");
                    self.output.write_all(b"That cell is taken.\n").await?;
                }
                None => {
                    warn!(seat = %self.name, input = %line.trim(), "Unrecognized input");
                    self.output.write_all(b"Enter a number from 1 to 9.\n").await?;
                }
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_computer(&self) -> bool {
        false
    }
}

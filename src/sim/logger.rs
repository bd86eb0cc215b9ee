//! Buffered CSV turn logging.
//!
//! Rows accumulate in memory and flush to the sink in batches, so the
//! turn loop never blocks on I/O beyond the occasional buffered write.
//! Formatting is plain CSV: every field is numeric or a known tag, none
//! contain commas.

use std::io::{self, Write};

use serde::{Deserialize, Serialize};

use crate::engine::{Engine, TurnReport};

const HEADER: &str = "game_id,turn_number,player_id,total_players,position,cash,bank_cash,net_worth,properties_owned,in_jail,action_taken,result_outcome,game_winner";

/// One logged turn, in the column layout training jobs consume.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LogRow {
    pub game_id: u64,
    pub turn_number: u32,
    pub player_id: u8,
    pub total_players: usize,
    pub position: usize,
    pub cash: i64,
    pub bank_cash: i64,
    pub net_worth: i64,
    pub properties_owned: usize,
    pub in_jail: bool,
    pub action_taken: String,
    pub result_outcome: String,
    /// Filled in once the game is over; empty in the output until then.
    pub game_winner: Option<u8>,
}

impl LogRow {
    /// Capture a row from the engine's state right after a turn.
    #[must_use]
    pub fn capture(game_id: u64, engine: &Engine, report: &TurnReport) -> Self {
        let player = engine.player(report.player);
        let action_taken = match &report.trade {
            Some(trade) => trade.tag(),
            None => report.result_tag(),
        };

        Self {
            game_id,
            turn_number: engine.turn_count(),
            player_id: report.player.0,
            total_players: engine.players().len(),
            position: player.position,
            cash: player.cash,
            bank_cash: report.bank_cash,
            net_worth: player.net_worth(engine.board()),
            properties_owned: player.properties.len(),
            in_jail: player.in_jail,
            action_taken,
            result_outcome: report.result_tag(),
            game_winner: None,
        }
    }

    fn write_csv(&self, out: &mut impl Write) -> io::Result<()> {
        writeln!(
            out,
            "{},{},{},{},{},{},{},{},{},{},{},{},{}",
            self.game_id,
            self.turn_number,
            self.player_id,
            self.total_players,
            self.position,
            self.cash,
            self.bank_cash,
            self.net_worth,
            self.properties_owned,
            u8::from(self.in_jail),
            self.action_taken,
            self.result_outcome,
            self.game_winner
                .map(|w| w.to_string())
                .unwrap_or_default(),
        )
    }
}

/// Buffered writer for [`LogRow`]s.
pub struct TurnLogger<W: Write> {
    sink: W,
    buffer: Vec<LogRow>,
    buffer_size: usize,
    header_written: bool,
}

impl<W: Write> TurnLogger<W> {
    /// Create a logger that flushes every `buffer_size` rows.
    pub fn new(sink: W, buffer_size: usize) -> Self {
        Self {
            sink,
            buffer: Vec::new(),
            buffer_size: buffer_size.max(1),
            header_written: false,
        }
    }

    /// Rows currently buffered.
    #[must_use]
    pub fn buffered(&self) -> usize {
        self.buffer.len()
    }

    /// Stage a row, flushing if the buffer is full.
    pub fn log(&mut self, row: LogRow) -> io::Result<()> {
        self.buffer.push(row);
        if self.buffer.len() >= self.buffer_size {
            self.flush()?;
        }
        Ok(())
    }

    /// Write all buffered rows to the sink.
    pub fn flush(&mut self) -> io::Result<()> {
        if self.buffer.is_empty() {
            return Ok(());
        }

        if !self.header_written {
            writeln!(self.sink, "{}", HEADER)?;
            self.header_written = true;
        }

        for row in &self.buffer {
            row.write_csv(&mut self.sink)?;
        }
        self.buffer.clear();
        self.sink.flush()
    }

    /// Flush remaining rows and hand the sink back.
    pub fn finalize(mut self) -> io::Result<W> {
        self.flush()?;
        Ok(self.sink)
    }
}

//! Handshake and the per-process synchronizer loop.
//!
//! Each peer runs one [`GameSession`]: a fixed-cadence tick loop that drains
//! local input, drains moves received from the peer, and re-renders. The
//! transport lives on a dedicated task; moves cross between it and the loop
//! over channels, so the game state is only ever mutated from one call site.

use tokio::sync::mpsc::{self, error::TryRecvError, UnboundedReceiver, UnboundedSender};
use tokio::time::{interval, Duration};

use crate::{
    common::MoveOutcome,
    config::{CELL_SIZE, FRAME_RATE, GRID_SIZE},
    game::{GameState, Role},
    protocol::{Message, PROTOCOL_VERSION},
    transport::Transport,
    ui::{Frontend, InputEvent},
};

/// Map a canvas pixel position to a grid cell. Returns `None` for clicks
/// outside the 15x15 playing area.
pub fn pixel_to_cell(x: u32, y: u32) -> Option<(usize, usize)> {
    let col = (x / CELL_SIZE) as usize;
    let row = (y / CELL_SIZE) as usize;
    if row < GRID_SIZE && col < GRID_SIZE {
        Some((row, col))
    } else {
        None
    }
}

/// Host side of the handshake: announce the session and the agreed first
/// mover, then block for the guest's answer. Anything other than a
/// version-matched `ConnectionConfirmed` is fatal; there is no retry.
pub async fn host_handshake(
    transport: &mut dyn Transport,
    host_moves_first: bool,
) -> anyhow::Result<()> {
    transport
        .send(Message::ConnectionRequest {
            version: PROTOCOL_VERSION,
            host_moves_first,
        })
        .await?;

    match transport.recv().await? {
        Message::ConnectionConfirmed { version } if version == PROTOCOL_VERSION => {
            log::info!("Handshake complete, peer confirmed");
            Ok(())
        }
        Message::ConnectionConfirmed { version } => Err(anyhow::anyhow!(
            "Protocol version mismatch: expected {}, got {}",
            PROTOCOL_VERSION,
            version
        )),
        Message::ConnectionDenied => Err(anyhow::anyhow!("Peer declined the connection")),
        other => Err(anyhow::anyhow!(
            "Expected ConnectionConfirmed, got unexpected message: {:?}",
            other
        )),
    }
}

/// Guest side of the handshake: wait for the host's `ConnectionRequest`,
/// ask `accept` whether to play, and answer. Returns the negotiated
/// `host_moves_first` flag, or `None` when the operator declined (a clean
/// local outcome, not an error).
pub async fn guest_handshake(
    transport: &mut dyn Transport,
    accept: &mut dyn FnMut() -> bool,
) -> anyhow::Result<Option<bool>> {
    match transport.recv().await? {
        Message::ConnectionRequest {
            version,
            host_moves_first,
        } if version == PROTOCOL_VERSION => {
            if accept() {
                transport
                    .send(Message::ConnectionConfirmed {
                        version: PROTOCOL_VERSION,
                    })
                    .await?;
                log::info!("Handshake complete, connection accepted");
                Ok(Some(host_moves_first))
            } else {
                transport.send(Message::ConnectionDenied).await?;
                Ok(None)
            }
        }
        Message::ConnectionRequest { version, .. } => Err(anyhow::anyhow!(
            "Protocol version mismatch: expected {}, got {}",
            PROTOCOL_VERSION,
            version
        )),
        other => Err(anyhow::anyhow!(
            "Expected ConnectionRequest, got unexpected message: {:?}",
            other
        )),
    }
}

/// Owns the transport: forwards outbound messages and pushes everything
/// received (or the first receive error) to the session loop. Exits when
/// either side of the link goes away. Strict turn order means an outbound
/// move never races a half-read inbound frame.
async fn pump(
    mut transport: Box<dyn Transport>,
    mut outbound: UnboundedReceiver<Message>,
    inbound: UnboundedSender<anyhow::Result<Message>>,
) {
    loop {
        tokio::select! {
            out = outbound.recv() => match out {
                Some(msg) => {
                    if let Err(e) = transport.send(msg).await {
                        let _ = inbound.send(Err(e));
                        break;
                    }
                }
                None => break,
            },
            msg = transport.recv() => {
                let failed = msg.is_err();
                if inbound.send(msg).is_err() || failed {
                    break;
                }
            }
        }
    }
}

/// Binds local input and the peer link around one [`GameState`].
pub struct GameSession {
    game: GameState,
    local_role: Role,
    frontend: Box<dyn Frontend>,
    outbound: UnboundedSender<Message>,
    inbound: UnboundedReceiver<anyhow::Result<Message>>,
}

impl GameSession {
    /// Wire a session over an already-handshaken transport. Spawns the
    /// network task; must be called inside a tokio runtime.
    pub fn new(
        game: GameState,
        local_role: Role,
        transport: Box<dyn Transport>,
        frontend: Box<dyn Frontend>,
    ) -> Self {
        let (out_tx, out_rx) = mpsc::unbounded_channel();
        let (in_tx, in_rx) = mpsc::unbounded_channel();
        tokio::spawn(pump(transport, out_rx, in_tx));
        Self {
            game,
            local_role,
            frontend,
            outbound: out_tx,
            inbound: in_rx,
        }
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    fn local_turn(&self) -> bool {
        self.game.current_player().role == self.local_role
    }

    /// Run the synchronizer until the operator quits. Connection loss is
    /// fatal while the game is undecided; once a winner exists the loop
    /// keeps rendering the final board and only the operator ends it.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        let mut ticker = interval(Duration::from_millis(1000 / FRAME_RATE as u64));
        loop {
            ticker.tick().await;

            while let Some(event) = self.frontend.poll_input() {
                match event {
                    InputEvent::Quit => {
                        log::info!("Quit requested");
                        return Ok(());
                    }
                    InputEvent::Click { x, y } => self.handle_click(x, y)?,
                }
            }

            loop {
                match self.inbound.try_recv() {
                    Ok(Ok(msg)) => self.handle_peer_message(msg)?,
                    Ok(Err(e)) => {
                        if self.game.winner().is_none() {
                            return Err(e.context("connection to peer failed"));
                        }
                        // Game already decided; a vanished peer is fine.
                        break;
                    }
                    Err(TryRecvError::Disconnected) => {
                        if self.game.winner().is_none() {
                            return Err(anyhow::anyhow!("Connection to peer lost"));
                        }
                        break;
                    }
                    Err(TryRecvError::Empty) => break,
                }
            }

            self.frontend.render(&self.game);
        }
    }

    fn handle_click(&mut self, x: u32, y: u32) -> anyhow::Result<()> {
        let Some((row, col)) = pixel_to_cell(x, y) else {
            return Ok(());
        };
        if !self.local_turn() {
            log::debug!("Ignoring click at ({}, {}): not our turn", row, col);
            return Ok(());
        }
        match self.game.make_move(row, col) {
            Ok(outcome) => {
                self.outbound
                    .send(Message::Move {
                        row: row as u8,
                        col: col as u8,
                    })
                    .map_err(|_| anyhow::anyhow!("Connection to peer lost"))?;
                if outcome == MoveOutcome::PlacedAndWon {
                    if let Some(winner) = self.game.winner() {
                        log::info!("Player {} wins", winner.mark);
                    }
                }
            }
            Err(e) => log::debug!("Rejected local move at ({}, {}): {}", row, col, e),
        }
        Ok(())
    }

    fn handle_peer_message(&mut self, msg: Message) -> anyhow::Result<()> {
        match msg {
            Message::Move { row, col } => {
                match self.game.make_move(row as usize, col as usize) {
                    Ok(MoveOutcome::PlacedAndWon) => {
                        if let Some(winner) = self.game.winner() {
                            log::info!("Player {} wins", winner.mark);
                        }
                    }
                    Ok(MoveOutcome::Placed) => {}
                    // The peer and we disagree on the board; keep our copy.
                    Err(e) => log::warn!("Peer move at ({}, {}) rejected: {}", row, col, e),
                }
                Ok(())
            }
            other => Err(anyhow::anyhow!(
                "Unexpected control message during play: {:?}",
                other
            )),
        }
    }
}

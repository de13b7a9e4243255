//! Pipeline animation timer.
//!
//! Owns the recurring advance cadence and emits ticks for the presentation
//! layer. One interval exists per workflow session: switching workflows drops
//! the old interval and starts a fresh one, so the new pipeline always gets a
//! full period before its first advance.

use anyhow::Result;
use std::time::Duration;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};

/// Commands emitted by UI layers to control the animation cadence.
#[derive(Debug, Clone)]
pub enum UiCommand {
    /// The active workflow changed; restart the cadence for the new session.
    WorkflowChanged,
    Quit,
}

/// Events emitted to the presentation layer.
#[derive(Debug, Clone)]
pub enum UiEvent {
    /// One automatic-advance period elapsed. Whether it takes effect (pause,
    /// visibility) is decided by the consumer; ticks are never queued up.
    Tick,
}

fn new_interval(period: Duration) -> tokio::time::Interval {
    let mut interval = tokio::time::interval(period);
    // First tick of a tokio interval fires immediately; the animation cadence
    // starts one full period after the session begins.
    interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
    interval.reset();
    interval
}

/// Drive the animation timer until the UI asks to quit or goes away.
pub async fn run_driver(
    period: Duration,
    event_tx: UnboundedSender<UiEvent>,
    mut cmd_rx: UnboundedReceiver<UiCommand>,
) -> Result<()> {
    let mut interval = new_interval(period);

    loop {
        tokio::select! {
            cmd = cmd_rx.recv() => {
                match cmd {
                    Some(UiCommand::WorkflowChanged) => {
                        interval = new_interval(period);
                    }
                    Some(UiCommand::Quit) | None => break,
                }
            }
            _ = interval.tick() => {
                if event_tx.send(UiEvent::Tick).is_err() {
                    // UI thread is gone; nothing left to animate.
                    break;
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;

    #[tokio::test(start_paused = true)]
    async fn emits_one_tick_per_period() {
        let (event_tx, mut event_rx) = mpsc::unbounded_channel();
        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();
        let handle = tokio::spawn(run_driver(
            Duration::from_millis(2000),
            event_tx,
            cmd_rx,
        ));

        tokio::time::sleep(Duration::from_millis(6100)).await;
        let mut ticks = 0;
        while event_rx.try_recv().is_ok() {
            ticks += 1;
        }
        assert_eq!(ticks, 3);

        cmd_tx.send(UiCommand::Quit).unwrap();
        handle.await.unwrap().unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn workflow_change_restarts_the_cadence() {
        let (event_tx, mut event_rx) = mpsc::unbounded_channel();
        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();
        let handle = tokio::spawn(run_driver(
            Duration::from_millis(2000),
            event_tx,
            cmd_rx,
        ));

        // Part-way through a period, switch workflows: the elapsed time must
        // not count toward the new session's first tick.
        tokio::time::sleep(Duration::from_millis(1500)).await;
        cmd_tx.send(UiCommand::WorkflowChanged).unwrap();
        tokio::time::sleep(Duration::from_millis(1500)).await;
        assert!(event_rx.try_recv().is_err());
        tokio::time::sleep(Duration::from_millis(600)).await;
        assert!(event_rx.try_recv().is_ok());

        cmd_tx.send(UiCommand::Quit).unwrap();
        handle.await.unwrap().unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn stops_when_command_channel_closes() {
        let (event_tx, _event_rx) = mpsc::unbounded_channel();
        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();
        let handle = tokio::spawn(run_driver(Duration::from_millis(100), event_tx, cmd_rx));
        drop(cmd_tx);
        handle.await.unwrap().unwrap();
    }
}

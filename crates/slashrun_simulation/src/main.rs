//! Headless прогон SLASHRUN locomotion
//!
//! Scripted input replay без рендера: бег вперёд с crawl окном и
//! периодическими прыжками. Smoke test пайплайна event → intent.

use bevy::prelude::*;
use slashrun_simulation::*;

fn main() {
    let mut app = create_headless_app(42);
    app.add_plugins(SimulationPlugin);

    // Player-controlled актор
    let player = app
        .world_mut()
        .spawn((
            Player,
            Locomotion::default(),
            MoveSpeed::default(),
            MovementIntent::default(),
            CameraRig::default(),
        ))
        .id();

    log_info(&format!(
        "Starting SLASHRUN headless replay (player {:?})",
        player
    ));

    for tick in 0..600u32 {
        // Scripted input: crawl удерживается на тиках 120..240,
        // jump каждые 100 тиков (на 150 попадает в crawl окно → отказ)
        if tick == 120 {
            app.world_mut().send_event(PlayerActionEvent::discrete(
                InputAction::Crawl,
                ActionPhase::Started,
            ));
        }
        if tick == 240 {
            app.world_mut().send_event(PlayerActionEvent::discrete(
                InputAction::Crawl,
                ActionPhase::Completed,
            ));
        }
        if tick % 100 == 50 {
            app.world_mut().send_event(PlayerActionEvent::discrete(
                InputAction::Jump,
                ActionPhase::Triggered,
            ));
        }

        // Бег вперёд весь прогон
        app.world_mut()
            .send_event(PlayerActionEvent::axis(InputAction::Move, Vec2::new(0.0, 1.0)));

        // Fixed tick напрямую (headless, без wall-clock аккумулятора)
        app.world_mut().run_schedule(FixedUpdate);

        if tick % 100 == 0 {
            if let Some(intent) = app.world().get::<MovementIntent>(player) {
                log(&format!(
                    "Tick {}: forward {:.1}, lateral {:.1}",
                    tick, intent.forward, intent.lateral
                ));
            }
        }
    }

    let jumps = app.world().resource::<Events<JumpIntent>>().len();
    log_info(&format!("Replay complete: {} jump intents granted", jumps));
}

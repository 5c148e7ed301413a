//! JSON command protocol for scripted drivers.
//!
//! Every drawing command maps onto one editor input event; the remaining
//! commands only inspect state.

use serde::{Deserialize, Serialize};
use shared::InputEvent;

use crate::harness::TestHarness;

/// A command a script can execute.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum AgentCommand {
    /// Place a vertex at surface-local coordinates
    Click { x: f64, y: f64 },
    /// Close the shape in progress
    DoubleClick,
    /// Drop the shape in progress
    Cancel,
    /// Move the pointer (updates the preview segment)
    Move { x: f64, y: f64 },
    /// Pointer left the surface
    Leave,
    /// Undo the last operation.
    Undo,
    /// Redo the last undone operation.
    Redo,
    /// Clear the drawing and its history.
    Clear,
    /// Inspect the scene: shapes and history depth.
    Inspect,
    /// Export the scene as JSON.
    ExportScene,
    /// Return the draw commands of the current frame.
    Render,
}

impl AgentCommand {
    /// The editor event this command stands for, if any
    pub fn as_event(&self) -> Option<InputEvent> {
        match *self {
            AgentCommand::Click { x, y } => Some(InputEvent::PrimaryClick { x, y }),
            AgentCommand::DoubleClick => Some(InputEvent::DoubleClick),
            AgentCommand::Cancel => Some(InputEvent::ContextMenu),
            AgentCommand::Move { x, y } => Some(InputEvent::PointerMove { x, y }),
            AgentCommand::Leave => Some(InputEvent::PointerLeave),
            AgentCommand::Undo => Some(InputEvent::Undo),
            AgentCommand::Redo => Some(InputEvent::Redo),
            AgentCommand::Clear
            | AgentCommand::Inspect
            | AgentCommand::ExportScene
            | AgentCommand::Render => None,
        }
    }
}

/// Response from executing a command.
#[derive(Debug, Serialize, Deserialize)]
pub struct CommandResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl CommandResponse {
    fn ok() -> Self {
        Self {
            success: true,
            error: None,
            data: None,
        }
    }

    fn ok_with_data(data: serde_json::Value) -> Self {
        Self {
            success: true,
            error: None,
            data: Some(data),
        }
    }

    fn err(msg: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(msg.into()),
            data: None,
        }
    }
}

/// Execute a single command on the harness.
pub fn execute_command(harness: &mut TestHarness, cmd: AgentCommand) -> CommandResponse {
    match cmd {
        AgentCommand::Undo => {
            let undone = harness.undo();
            CommandResponse::ok_with_data(serde_json::json!({ "undone": undone }))
        }

        AgentCommand::Redo => {
            let redone = harness.redo();
            CommandResponse::ok_with_data(serde_json::json!({ "redone": redone }))
        }

        AgentCommand::Click { .. }
        | AgentCommand::DoubleClick
        | AgentCommand::Cancel
        | AgentCommand::Move { .. }
        | AgentCommand::Leave => {
            let changed = cmd.as_event().is_some_and(|event| harness.send(event));
            CommandResponse::ok_with_data(serde_json::json!({ "changed": changed }))
        }

        AgentCommand::Clear => {
            harness.clear();
            CommandResponse::ok()
        }

        AgentCommand::Inspect => {
            let shapes: Vec<serde_json::Value> = harness
                .finished_shapes()
                .iter()
                .enumerate()
                .map(|(index, shape)| {
                    serde_json::json!({
                        "index": index,
                        "vertex_count": shape.len(),
                    })
                })
                .collect();
            CommandResponse::ok_with_data(serde_json::json!({
                "shape_count": shapes.len(),
                "shapes": shapes,
                "current_vertex_count": harness.current_points().len(),
                "undo_depth": harness.undo_depth(),
                "redo_depth": harness.redo_depth(),
            }))
        }

        AgentCommand::ExportScene => {
            let json = harness.export_scene_json();
            CommandResponse::ok_with_data(serde_json::json!({ "scene_json": json }))
        }

        AgentCommand::Render => {
            harness.render();
            match serde_json::to_value(harness.frame()) {
                Ok(frame) => CommandResponse::ok_with_data(serde_json::json!({ "frame": frame })),
                Err(e) => CommandResponse::err(format!("Failed to encode frame: {e}")),
            }
        }
    }
}

/// Parse and execute a single JSON command string.
pub fn execute_json(harness: &mut TestHarness, json: &str) -> Result<CommandResponse, String> {
    let cmd: AgentCommand =
        serde_json::from_str(json).map_err(|e| format!("Invalid command JSON: {e}"))?;
    Ok(execute_command(harness, cmd))
}

/// Parse and execute multiple JSON commands (array).
pub fn execute_json_batch(
    harness: &mut TestHarness,
    json: &str,
) -> Result<Vec<CommandResponse>, String> {
    let cmds: Vec<AgentCommand> =
        serde_json::from_str(json).map_err(|e| format!("Invalid commands JSON: {e}"))?;
    Ok(cmds
        .into_iter()
        .map(|cmd| execute_command(harness, cmd))
        .collect())
}

//! Workspace-level integration tests for SmartCalc live in `tests/`.

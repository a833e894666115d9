/// Building listing command.
pub mod buildings;
/// Blueprint document dump command.
pub mod decode;
/// Renderer feed export command.
pub mod export;
/// Payload summary command.
pub mod info;
/// Belt lane listing command.
pub mod lanes;
/// Static model catalog for display annotation.
pub mod models;

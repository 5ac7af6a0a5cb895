pub mod background_remover;
pub mod client;
pub mod image_synthesizer;
pub mod prompt_enhancer;

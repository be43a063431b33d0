//! Core building blocks: the `Upscaler` itself, the environment protocol it
//! speaks (`env`), and serializable `params` for config files and the CLI.
pub mod env;
pub mod params;
pub mod upscaler;

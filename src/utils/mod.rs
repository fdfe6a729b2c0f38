pub mod audio;

pub use audio::encode_audio_file;

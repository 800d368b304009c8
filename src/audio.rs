use log::warn;
use rodio::{Decoder, OutputStream, OutputStreamHandle, StreamError};
use std::io::Cursor;

const SAMPLE_RATE: u32 = 44_100;
const POP_FREQ: u32 = 440;
const POP_SECONDS: f32 = 0.10;
const POP_AMPLITUDE: i16 = 18_000;

/// 16-bit mono square wave, one period high then low.
pub fn square_wave(sample_rate: u32, freq: u32, seconds: f32, amplitude: i16) -> Vec<i16> {
    let frames = (sample_rate as f32 * seconds) as usize;
    let period = (sample_rate / freq.max(1)).max(2) as usize;
    (0..frames)
        .map(|i| {
            if i % period < period / 2 {
                amplitude
            } else {
                -amplitude
            }
        })
        .collect()
}

/// Wrap PCM samples in a minimal RIFF/WAVE container.
pub fn encode_wav(samples: &[i16], sample_rate: u32) -> Vec<u8> {
    const CHANNELS: u16 = 1;
    const BITS: u16 = 16;
    let block_align = CHANNELS * BITS / 8;
    let data_len = (samples.len() * 2) as u32;

    let mut out = Vec::with_capacity(44 + data_len as usize);
    out.extend_from_slice(b"RIFF");
    out.extend_from_slice(&(36 + data_len).to_le_bytes());
    out.extend_from_slice(b"WAVE");

    out.extend_from_slice(b"fmt ");
    out.extend_from_slice(&16u32.to_le_bytes());
    out.extend_from_slice(&1u16.to_le_bytes()); // PCM
    out.extend_from_slice(&CHANNELS.to_le_bytes());
    out.extend_from_slice(&sample_rate.to_le_bytes());
    out.extend_from_slice(&(sample_rate * u32::from(block_align)).to_le_bytes());
    out.extend_from_slice(&block_align.to_le_bytes());
    out.extend_from_slice(&BITS.to_le_bytes());

    out.extend_from_slice(b"data");
    out.extend_from_slice(&data_len.to_le_bytes());
    for sample in samples {
        out.extend_from_slice(&sample.to_le_bytes());
    }
    out
}

pub fn pop_wav() -> Vec<u8> {
    encode_wav(
        &square_wave(SAMPLE_RATE, POP_FREQ, POP_SECONDS, POP_AMPLITUDE),
        SAMPLE_RATE,
    )
}

/// A sound effect that may be unavailable. Callers just `play` it.
pub enum Sfx {
    Enabled {
        // Dropping the stream silences the handle, so it lives as long as the effect.
        _stream: OutputStream,
        handle: OutputStreamHandle,
        wav: Vec<u8>,
    },
    Disabled,
}

impl Sfx {
    /// Open the default output device for the pop effect. No device means no
    /// sound, never a failed start.
    pub fn pop(enabled: bool) -> Self {
        if !enabled {
            return Sfx::Disabled;
        }
        Self::from_stream(OutputStream::try_default(), pop_wav())
    }

    pub fn from_stream(
        stream: Result<(OutputStream, OutputStreamHandle), StreamError>,
        wav: Vec<u8>,
    ) -> Self {
        if let Err(e) = Decoder::new(Cursor::new(wav.clone())) {
            warn!("Sound disabled, effect does not decode: {}", e);
            return Sfx::Disabled;
        }
        match stream {
            Ok((stream, handle)) => Sfx::Enabled {
                _stream: stream,
                handle,
                wav,
            },
            Err(e) => {
                warn!("Sound disabled: {}", e);
                Sfx::Disabled
            }
        }
    }

    pub fn is_enabled(&self) -> bool {
        matches!(self, Sfx::Enabled { .. })
    }

    /// Fire and forget. A failing device turns the effect off for good.
    pub fn play(&mut self) {
        if let Sfx::Enabled { handle, wav, .. } = self {
            match handle.play_once(Cursor::new(wav.clone())) {
                Ok(sink) => sink.detach(),
                Err(e) => {
                    warn!("Sound disabled after playback error: {}", e);
                    *self = Sfx::Disabled;
                }
            }
        }
    }
}

use anyhow::{Context, Result};
use rodio::{Decoder, OutputStream, Sink};
use std::fs::File;
use std::io::{BufReader, Write};

/// 把下载好的音频写进临时文件并播放一次。
/// 临时文件随 NamedTempFile 的 drop 删除，播放成败都会清理。
pub fn play_bytes(bytes: &[u8]) -> Result<()> {
    let mut temp = tempfile::Builder::new()
        .prefix("dict_audio_")
        .suffix(".mp3")
        .tempfile()
        .context("无法创建临时音频文件")?;
    temp.write_all(bytes)?;
    temp.flush()?;

    let file = File::open(temp.path())?;
    let (_stream, handle) = OutputStream::try_default().context("无法打开音频输出设备")?;
    let sink = Sink::try_new(&handle)?;
    sink.append(Decoder::new(BufReader::new(file))?);
    sink.sleep_until_end();
    Ok(())
}

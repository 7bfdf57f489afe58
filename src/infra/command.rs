use tokio::io::{AsyncBufReadExt, BufReader};

/// The captured output of a finished subordinate process.
/// The two streams are kept separate: the classification policy treats
/// error-stream content differently from standard output.
///
/// 已结束子进程的捕获输出。
/// 两个流分开保存：分类策略对错误流内容和标准输出的处理不同。
#[derive(Debug)]
pub struct Capture {
    pub status: std::process::ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

/// Spawns a command and captures its stdout and stderr separately.
/// The output streams are read concurrently while waiting for the process
/// to exit, so neither pipe can fill up and stall the child.
///
/// # Arguments
/// * `cmd` - The `tokio::process::Command` to execute.
///
/// # Returns
/// A `Capture` with the exit status and both streams, or the launch-level
/// I/O error when the process could not be spawned.
///
/// 派生一个命令，分别捕获其 stdout 和 stderr。
/// 在等待进程退出的同时并发读取输出流，这样任何一个管道都不会
/// 被填满而阻塞子进程。
///
/// # Arguments
/// * `cmd` - 要执行的 `tokio::process::Command`。
///
/// # Returns
/// 包含退出状态和两个流的 `Capture`；当进程无法派生时返回启动级 I/O 错误。
pub async fn spawn_and_capture(mut cmd: tokio::process::Command) -> std::io::Result<Capture> {
    let mut child = cmd
        .stdout(std::process::Stdio::piped())
        .stderr(std::process::Stdio::piped())
        .spawn()?;

    let stdout = child
        .stdout
        .take()
        .ok_or_else(|| std::io::Error::other("failed to capture child stdout"))?;
    let stderr = child
        .stderr
        .take()
        .ok_or_else(|| std::io::Error::other("failed to capture child stderr"))?;

    // Read each stream line by line in its own task.
    // 在各自的任务中逐行读取每个流。
    let stdout_handle = tokio::spawn(async move {
        let mut buf = String::new();
        let reader = BufReader::new(stdout);
        let mut lines = reader.lines();
        while let Ok(Some(line)) = lines.next_line().await {
            buf.push_str(&line);
            buf.push('\n');
        }
        buf
    });
    let stderr_handle = tokio::spawn(async move {
        let mut buf = String::new();
        let reader = BufReader::new(stderr);
        let mut lines = reader.lines();
        while let Ok(Some(line)) = lines.next_line().await {
            buf.push_str(&line);
            buf.push('\n');
        }
        buf
    });

    // Wait for the process to exit, then for the readers, to ensure all
    // output is captured before the capture is returned.
    // 等待进程退出，然后等待读取任务，确保在返回之前捕获所有输出。
    let status = child.wait().await?;
    let stdout = stdout_handle.await.unwrap_or_default();
    let stderr = stderr_handle.await.unwrap_or_default();

    Ok(Capture {
        status,
        stdout,
        stderr,
    })
}

use std::fs;
use std::io;
use std::path::Path;

/// 移動檔案；跨檔案系統時改為複製後刪除原檔
///
/// 呼叫端需自行確認目標不存在
pub fn move_file(source: &Path, target: &Path) -> io::Result<()> {
    match fs::rename(source, target) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::CrossesDevices => copy_and_delete(source, target),
        Err(e) => Err(e),
    }
}

fn copy_and_delete(source: &Path, target: &Path) -> io::Result<()> {
    fs::copy(source, target)?;
    if let Err(e) = fs::remove_file(source) {
        // 避免兩邊各留一份
        let _ = fs::remove_file(target);
        return Err(e);
    }
    Ok(())
}

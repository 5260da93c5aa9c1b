use std::fs::File;

/// Reads a whole trace file into a byte buffer for the simulator
///
/// Trace-file errors are fatal to the run; the OS error string is included
/// in the message
pub fn read_trace(file: File) -> Result<impl AsRef<[u8]>, String> {
    // Compatibility on other systems
    #[cfg(not(unix))]
    {
        use std::io::Read;
        let mut file = file;
        let mut buf = Vec::new();
        file.read_to_end(&mut buf)
            .map_err(|e| format!("Couldn't read the trace file: {e}"))?;
        Ok(buf)
    }
    // Memory map the file for speed on unix systems
    #[cfg(unix)]
    {
        use memmap2::{Advice, Mmap};
        // The simulator reads the buffer front to back exactly once
        unsafe {
            let m = Mmap::map(&file).map_err(|e| format!("Couldn't memory map the trace file: {e}"))?;
            m.advise(Advice::Sequential)
                .map_err(|e| format!("Failed to provide access advice to the OS, {e}"))?;
            Ok(m)
        }
    }
}

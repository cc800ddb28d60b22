//! Adapters: concrete implementations of the hexagonal port traits.
//!
//! | Adapter        | Implements   | Connects to                    |
//! |----------------|--------------|--------------------------------|
//! | `serial`       | LineSource   | ESP32 USB-UART (`serialport`)  |
//! | `csv_sink`     | RecordSink   | CSV file on disk (`csv`)       |
//! | `time`         | Clock        | Host local time (`chrono`)     |
//! | `console_sink` | EventSink    | Operator terminal (stdout)     |

pub mod console_sink;
pub mod csv_sink;
pub mod serial;
pub mod time;

pub use console_sink::ConsoleEventSink;
pub use csv_sink::CsvRecordSink;
pub use serial::SerialLineSource;
pub use time::SystemClock;

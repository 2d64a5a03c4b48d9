//! Blocking TCP transport for the viewer protocol.

use std::io::{BufRead, BufReader, Read, Write};
use std::net::{SocketAddr, TcpStream, ToSocketAddrs};

use rv_core::{Real, Tq};
use tracing::{debug, trace};

use crate::client::ViewerClient;
use crate::color::Color;
use crate::config::ViewerConfig;
use crate::error::{ViewerError, ViewerResult};
use crate::protocol::{Request, Response, ViewerCall};

/// Longest reply line accepted, newline included.
pub const MAX_REPLY_BYTES: u64 = 64 * 1024;

/// Connection to a viewer server. One request in flight at a time.
///
/// Once a call fails mid-exchange (socket error, timeout, unreadable reply)
/// the stream position is unknown and every later call returns
/// `ViewerError::Disconnected`.
pub struct TcpViewerClient {
    reader: BufReader<TcpStream>,
    writer: TcpStream,
    peer: SocketAddr,
    next_id: u64,
    broken: bool,
}

impl TcpViewerClient {
    /// Connect to `config.address`, trying each resolved address in turn.
    pub fn connect(config: &ViewerConfig) -> ViewerResult<Self> {
        config.validate()?;
        let connection_error = |source: std::io::Error| ViewerError::Connection {
            address: config.address.clone(),
            source,
        };

        let addrs = config
            .address
            .to_socket_addrs()
            .map_err(connection_error)?;

        let mut last_err = None;
        for addr in addrs {
            match TcpStream::connect_timeout(&addr, config.connect_timeout()) {
                Ok(stream) => return Self::from_stream(stream, config),
                Err(e) => {
                    debug!(%addr, error = %e, "viewer connect attempt failed");
                    last_err = Some(e);
                }
            }
        }

        Err(connection_error(last_err.unwrap_or_else(|| {
            std::io::Error::new(
                std::io::ErrorKind::AddrNotAvailable,
                "address resolved to nothing",
            )
        })))
    }

    fn from_stream(stream: TcpStream, config: &ViewerConfig) -> ViewerResult<Self> {
        stream.set_nodelay(true)?;
        stream.set_read_timeout(config.io_timeout())?;
        stream.set_write_timeout(config.io_timeout())?;
        let peer = stream.peer_addr()?;
        let reader = BufReader::new(stream.try_clone()?);
        debug!(%peer, "connected to viewer");
        Ok(Self {
            reader,
            writer: stream,
            peer,
            next_id: 1,
            broken: false,
        })
    }

    pub fn peer(&self) -> SocketAddr {
        self.peer
    }

    /// False once an exchange failed and the connection was given up.
    pub fn is_usable(&self) -> bool {
        !self.broken
    }

    fn call(&mut self, call: ViewerCall) -> ViewerResult<()> {
        if self.broken {
            return Err(ViewerError::Disconnected);
        }
        let id = self.next_id;
        self.next_id += 1;
        let method = call.method();

        let response = self.exchange(id, &call).inspect_err(|e| {
            debug!(id, method, error = %e, "viewer connection unusable");
            self.broken = true;
        })?;

        if !response.ok {
            return Err(ViewerError::Protocol {
                method,
                message: response
                    .error
                    .unwrap_or_else(|| "request rejected".to_string()),
            });
        }
        Ok(())
    }

    /// Send one request and read its reply. Any error leaves the stream out of sync.
    fn exchange(&mut self, id: u64, call: &ViewerCall) -> ViewerResult<Response> {
        let method = call.method();
        let protocol_error = |message: String| ViewerError::Protocol { method, message };

        let mut line = serde_json::to_string(&Request { id, call })?;
        line.push('\n');
        trace!(id, method, "viewer request");
        self.writer.write_all(line.as_bytes())?;
        self.writer.flush()?;

        let mut reply = Vec::new();
        let read = (&mut self.reader)
            .take(MAX_REPLY_BYTES)
            .read_until(b'\n', &mut reply)?;
        if read == 0 {
            return Err(ViewerError::Disconnected);
        }
        if reply.last() != Some(&b'\n') {
            return Err(if read as u64 == MAX_REPLY_BYTES {
                protocol_error(format!("reply exceeds {MAX_REPLY_BYTES} bytes"))
            } else {
                ViewerError::Disconnected
            });
        }

        let text = std::str::from_utf8(&reply)
            .map_err(|e| protocol_error(format!("reply is not UTF-8: {e}")))?;
        let response: Response = serde_json::from_str(text.trim_end())
            .map_err(|e| protocol_error(format!("malformed response: {e}")))?;

        if response.id != id {
            return Err(protocol_error(format!(
                "response id {} does not match request {id}",
                response.id
            )));
        }
        Ok(response)
    }
}

impl ViewerClient for TcpViewerClient {
    fn add_rod(
        &mut self,
        name: &str,
        color: Color,
        radius: Real,
        integration_time: Real,
        num_nodes: usize,
    ) -> ViewerResult<()> {
        self.call(ViewerCall::AddRod(
            name.to_string(),
            color,
            radius,
            integration_time,
            num_nodes,
        ))
    }

    fn add_to_group(&mut self, name: &str, group: &str) -> ViewerResult<()> {
        self.call(ViewerCall::AddToGroup(name.to_string(), group.to_string()))
    }

    fn apply_configuration(&mut self, object_name: &str, transform: &Tq) -> ViewerResult<()> {
        self.call(ViewerCall::ApplyConfiguration(
            object_name.to_string(),
            transform.to_array(),
        ))
    }

    fn refresh(&mut self) -> ViewerResult<()> {
        self.call(ViewerCall::Refresh)
    }
}

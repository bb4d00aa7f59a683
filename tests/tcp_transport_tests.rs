use gomoku::transport::tcp::TcpTransport;
use gomoku::transport::Transport;
use gomoku::{Message, PROTOCOL_VERSION};
use tokio::io::AsyncWriteExt;
use tokio::net::TcpListener;

#[tokio::test(flavor = "multi_thread")]
async fn test_framing_separates_back_to_back_messages() -> anyhow::Result<()> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;

    let sent = vec![
        Message::ConnectionRequest {
            version: PROTOCOL_VERSION,
            host_moves_first: true,
        },
        Message::Move { row: 7, col: 7 },
        Message::Move { row: 0, col: 14 },
        Message::ConnectionDenied,
    ];
    let to_send = sent.clone();

    let server = tokio::spawn(async move {
        let (socket, _) = listener.accept().await.unwrap();
        let mut transport = TcpTransport::new(socket);
        // Write everything without waiting, so the frames coalesce on the
        // wire and the receiver has to split them itself.
        for msg in to_send {
            transport.send(msg).await.unwrap();
        }
    });

    let mut client = TcpTransport::connect(addr).await?;
    for expected in &sent {
        let got = client.recv().await?;
        assert_eq!(&got, expected);
    }

    server.await?;
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn test_oversized_length_prefix_rejected() -> anyhow::Result<()> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;

    let server = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        socket.write_all(&[0xFF, 0xFF, 0xFF, 0xFF]).await.unwrap();
        socket.flush().await.unwrap();
    });

    let mut client = TcpTransport::connect(addr).await?;
    let err = client.recv().await.unwrap_err().to_string();
    assert!(err.contains("too large"), "unexpected error: {}", err);

    server.await?;
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn test_zero_length_frame_rejected() -> anyhow::Result<()> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;

    let server = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        socket.write_all(&[0u8, 0, 0, 0]).await.unwrap();
        socket.flush().await.unwrap();
    });

    let mut client = TcpTransport::connect(addr).await?;
    let err = client.recv().await.unwrap_err().to_string();
    assert!(err.contains("Invalid message length"), "unexpected error: {}", err);

    server.await?;
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn test_truncated_frame_rejected() -> anyhow::Result<()> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;

    let server = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        // Claim 100 bytes but deliver 10, then close the connection.
        socket.write_all(&100u32.to_be_bytes()).await.unwrap();
        socket.write_all(&[0u8; 10]).await.unwrap();
        socket.flush().await.unwrap();
    });

    let mut client = TcpTransport::connect(addr).await?;
    server.await?;
    let err = client.recv().await.unwrap_err().to_string();
    assert!(err.contains("closed by peer"), "unexpected error: {}", err);
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn test_garbage_payload_rejected() -> anyhow::Result<()> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;

    let server = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let garbage = [0xAAu8, 0xBB, 0xCC, 0xDD, 0xEE, 0xFF];
        socket
            .write_all(&(garbage.len() as u32).to_be_bytes())
            .await
            .unwrap();
        socket.write_all(&garbage).await.unwrap();
        socket.flush().await.unwrap();
    });

    let mut client = TcpTransport::connect(addr).await?;
    let err = client.recv().await.unwrap_err().to_string();
    assert!(err.contains("Deserialization error"), "unexpected error: {}", err);

    server.await?;
    Ok(())
}

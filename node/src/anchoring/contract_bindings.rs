use alloy::sol;

sol! {
    // Mirrors contracts/RollUp.sol. The append-only commitment ledger: the
    // deploying manager is the sole authorized submitter, heights are
    // strictly sequential starting at 1.
    //
    // The creation bytecode is hand-assembled EVM for that source. Storage
    // layout: slot 0 manager, slot 1 committedHeight, and per height h the
    // commitment fields at keccak256(h . 2) + 0..5 with the cid bytes in the
    // slots after. The constructor stores the deployer as manager, then
    // copies the runtime out with the standard CODECOPY/RETURN epilogue.
    #[allow(missing_docs)]
    #[sol(rpc, bytecode = "336000556101bd806100116000396000f360003560e01c8063f87135671461004f5780637fe797ad14610043578063f326b2561461012c578063481c6a75146100375760006000fd5b60005460005260206000f35b60015460005260206000f35b50336000541461006a5763c0fc8a8a60e01b60005260046000fd5b6004358060401c60843560401c17156100835760006000fd5b600154811161009d57635152c52c60e01b60005260046000fd5b60015460010181146100ba57636b0f646260e01b60005260046000fd5b8060005260026020526040600020818155602435816001015560443581600201556064358160030155608435816004015560a4356004018035808360050155601f0160051c60005b81811015610123578060051b83016020013581600601850155600101610102565b50505050600155005b506004358060401c1561013f5760006000fd5b8060005260026020526040600020905060206000528054602052806001015460405280600201546060528060030154608052806004015460a05260c060c05280600501548060e052601f0160051c60005b818110156101b057806006018301548160051b6101000152600101610190565b5060051b610100016000f3fe")]
    contract RollUp {
        error HeightOutOfOrder();
        error HeightAlreadyCommitted();
        error NotManager();

        struct Commitment {
            uint64 height;
            bytes32 blockHash;
            bytes32 prevHash;
            bytes32 merkleRoot;
            uint64 timestamp;
            string cid;
        }

        function add(
            uint64 height,
            bytes32 blockHash,
            bytes32 prevHash,
            bytes32 merkleRoot,
            uint64 timestamp,
            string calldata cid
        ) external;

        function committedHeight() external view returns (uint64);

        function commitmentAt(uint64 height) external view returns (Commitment memory);

        function manager() external view returns (address);
    }
}

#[macro_use]
mod macros;

opcode_list! {
    data {
        OpData1 = 0x01,
        OpData20 = 0x14,
        OpData32 = 0x20,
        OpData33 = 0x21,
        OpData65 = 0x41,
        OpData75 = 0x4b,
    }
    named {
        OpFalse = 0x00 => "0",
        OpPushData1 = 0x4c => "OP_PUSHDATA1",
        OpPushData2 = 0x4d => "OP_PUSHDATA2",
        OpPushData4 = 0x4e => "OP_PUSHDATA4",
        Op1Negate = 0x4f => "-1",
        OpReserved = 0x50 => "OP_RESERVED",
        OpTrue = 0x51 => "1",
        Op2 = 0x52 => "2",
        Op3 = 0x53 => "3",
        Op4 = 0x54 => "4",
        Op5 = 0x55 => "5",
        Op6 = 0x56 => "6",
        Op7 = 0x57 => "7",
        Op8 = 0x58 => "8",
        Op9 = 0x59 => "9",
        Op10 = 0x5a => "10",
        Op11 = 0x5b => "11",
        Op12 = 0x5c => "12",
        Op13 = 0x5d => "13",
        Op14 = 0x5e => "14",
        Op15 = 0x5f => "15",
        Op16 = 0x60 => "16",

        // Control
        OpNop = 0x61 => "OP_NOP",
        OpVer = 0x62 => "OP_VER",
        OpIf = 0x63 => "OP_IF",
        OpNotIf = 0x64 => "OP_NOTIF",
        OpVerIf = 0x65 => "OP_VERIF",
        OpVerNotIf = 0x66 => "OP_VERNOTIF",
        OpElse = 0x67 => "OP_ELSE",
        OpEndIf = 0x68 => "OP_ENDIF",
        OpVerify = 0x69 => "OP_VERIFY",
        OpReturn = 0x6a => "OP_RETURN",

        // Stack
        OpToAltStack = 0x6b => "OP_TOALTSTACK",
        OpFromAltStack = 0x6c => "OP_FROMALTSTACK",
        Op2Drop = 0x6d => "OP_2DROP",
        Op2Dup = 0x6e => "OP_2DUP",
        Op3Dup = 0x6f => "OP_3DUP",
        Op2Over = 0x70 => "OP_2OVER",
        Op2Rot = 0x71 => "OP_2ROT",
        Op2Swap = 0x72 => "OP_2SWAP",
        OpIfDup = 0x73 => "OP_IFDUP",
        OpDepth = 0x74 => "OP_DEPTH",
        OpDrop = 0x75 => "OP_DROP",
        OpDup = 0x76 => "OP_DUP",
        OpNip = 0x77 => "OP_NIP",
        OpOver = 0x78 => "OP_OVER",
        OpPick = 0x79 => "OP_PICK",
        OpRoll = 0x7a => "OP_ROLL",
        OpRot = 0x7b => "OP_ROT",
        OpSwap = 0x7c => "OP_SWAP",
        OpTuck = 0x7d => "OP_TUCK",

        // Splice
        OpCat = 0x7e => "OP_CAT",
        OpSubStr = 0x7f => "OP_SUBSTR",
        OpLeft = 0x80 => "OP_LEFT",
        OpRight = 0x81 => "OP_RIGHT",
        OpSize = 0x82 => "OP_SIZE",

        // Bitwise logic
        OpInvert = 0x83 => "OP_INVERT",
        OpAnd = 0x84 => "OP_AND",
        OpOr = 0x85 => "OP_OR",
        OpXor = 0x86 => "OP_XOR",
        OpEqual = 0x87 => "OP_EQUAL",
        OpEqualVerify = 0x88 => "OP_EQUALVERIFY",
        OpReserved1 = 0x89 => "OP_RESERVED1",
        OpReserved2 = 0x8a => "OP_RESERVED2",

        // Numeric
        Op1Add = 0x8b => "OP_1ADD",
        Op1Sub = 0x8c => "OP_1SUB",
        Op2Mul = 0x8d => "OP_2MUL",
        Op2Div = 0x8e => "OP_2DIV",
        OpNegate = 0x8f => "OP_NEGATE",
        OpAbs = 0x90 => "OP_ABS",
        OpNot = 0x91 => "OP_NOT",
        Op0NotEqual = 0x92 => "OP_0NOTEQUAL",
        OpAdd = 0x93 => "OP_ADD",
        OpSub = 0x94 => "OP_SUB",
        OpMul = 0x95 => "OP_MUL",
        OpDiv = 0x96 => "OP_DIV",
        OpMod = 0x97 => "OP_MOD",
        OpLShift = 0x98 => "OP_LSHIFT",
        OpRShift = 0x99 => "OP_RSHIFT",
        OpBoolAnd = 0x9a => "OP_BOOLAND",
        OpBoolOr = 0x9b => "OP_BOOLOR",
        OpNumEqual = 0x9c => "OP_NUMEQUAL",
        OpNumEqualVerify = 0x9d => "OP_NUMEQUALVERIFY",
        OpNumNotEqual = 0x9e => "OP_NUMNOTEQUAL",
        OpLessThan = 0x9f => "OP_LESSTHAN",
        OpGreaterThan = 0xa0 => "OP_GREATERTHAN",
        OpLessThanOrEqual = 0xa1 => "OP_LESSTHANOREQUAL",
        OpGreaterThanOrEqual = 0xa2 => "OP_GREATERTHANOREQUAL",
        OpMin = 0xa3 => "OP_MIN",
        OpMax = 0xa4 => "OP_MAX",
        OpWithin = 0xa5 => "OP_WITHIN",

        // Crypto
        OpRipemd160 = 0xa6 => "OP_RIPEMD160",
        OpSha1 = 0xa7 => "OP_SHA1",
        OpSHA256 = 0xa8 => "OP_SHA256",
        OpHash160 = 0xa9 => "OP_HASH160",
        OpHash256 = 0xaa => "OP_HASH256",
        OpCodeSeparator = 0xab => "OP_CODESEPARATOR",
        OpCheckSig = 0xac => "OP_CHECKSIG",
        OpCheckSigVerify = 0xad => "OP_CHECKSIGVERIFY",
        OpCheckMultiSig = 0xae => "OP_CHECKMULTISIG",
        OpCheckMultiSigVerify = 0xaf => "OP_CHECKMULTISIGVERIFY",

        // Expansion
        OpNop1 = 0xb0 => "OP_NOP1",
        OpCheckLockTimeVerify = 0xb1 => "OP_CHECKLOCKTIMEVERIFY",
        OpCheckSequenceVerify = 0xb2 => "OP_CHECKSEQUENCEVERIFY",
        OpNop4 = 0xb3 => "OP_NOP4",
        OpNop5 = 0xb4 => "OP_NOP5",
        OpNop6 = 0xb5 => "OP_NOP6",
        OpNop7 = 0xb6 => "OP_NOP7",
        OpNop8 = 0xb7 => "OP_NOP8",
        OpNop9 = 0xb8 => "OP_NOP9",
        OpNop10 = 0xb9 => "OP_NOP10",

        OpInvalidOpCode = 0xff => "OP_INVALIDOPCODE",
    }
}

/// Whether the opcode pushes bytes (including the empty push of OP_0)
pub fn is_push_opcode(opcode: u8) -> bool {
    opcode <= codes::OpPushData4
}

/// Whether the opcode is one of OP_1..OP_16
pub fn is_small_int_opcode(opcode: u8) -> bool {
    (codes::OpTrue..=codes::Op16).contains(&opcode)
}

/// Converts OP_0 and OP_1..OP_16 to the integer they push.
pub fn to_small_int(opcode: u8) -> u8 {
    if opcode == codes::OpFalse {
        return 0;
    }
    opcode - (codes::OpTrue - 1)
}
